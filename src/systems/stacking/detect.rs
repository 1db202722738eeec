use tracing::trace;

use crate::domain::DeskObject;

use super::StackContext;

impl<'a> StackContext<'a> {
    /// Snapshot slots of objects resting directly on `base`.
    ///
    /// Detached candidates (fallen, lifted, examining, returning) never qualify.
    /// The base itself may be detached: a held book still reports what is on it.
    pub fn direct_support_slots(&self, base: &DeskObject) -> Vec<usize> {
        let base_profile = self.profile(base);
        if self.config.respect_no_stacking_on_top && base_profile.no_stacking_on_top {
            return Vec::new();
        }

        let base_top = base.position.y + base_profile.height;
        let base_radius = self.interaction_radius(base);

        let mut out = Vec::new();
        for (slot, candidate) in self.objects.iter().enumerate() {
            if candidate.id == base.id || candidate.is_detached() {
                continue;
            }

            if (candidate.position.y - base_top).abs() >= self.config.vertical_tolerance {
                continue;
            }

            let reach = (base_radius + self.interaction_radius(candidate)) * self.config.footprint_factor;
            if base.planar_distance(candidate) < reach {
                out.push(slot);
            }
        }

        trace!(base = base.id, supports = out.len(), "direct supports");
        out
    }

    /// Objects resting directly on `base`, in snapshot order.
    pub fn find_direct_supports(&self, base: &DeskObject) -> Vec<&'a DeskObject> {
        self.direct_support_slots(base)
            .into_iter()
            .map(|slot| &self.objects[slot])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::domain::{DeskObject, InteractionConfig, ProfileRegistry};
    use crate::systems::stacking::StackContext;

    fn ids(objects: &[&DeskObject]) -> Vec<u32> {
        objects.iter().map(|o| o.id).collect()
    }

    #[test]
    fn detached_candidates_never_qualify() {
        let profiles = ProfileRegistry::from_generated();
        let config = InteractionConfig::default();
        let book = DeskObject::new(1, "book", Vec3::new(0.0, 0.1, 0.0));
        let mut objects = vec![book.clone()];
        for (i, flag) in ["fallen", "lifted", "examining", "returning"].iter().enumerate() {
            let mut o = DeskObject::new(10 + i as u32, "notebook", Vec3::new(0.0, 0.25, 0.0));
            match *flag {
                "fallen" => o.is_fallen = true,
                "lifted" => o.is_lifted = true,
                "examining" => o.is_examining = true,
                _ => o.is_returning = true,
            }
            objects.push(o);
        }
        let ctx = StackContext::new(&profiles, &config, &objects);
        assert!(ctx.find_direct_supports(&book).is_empty());
    }

    #[test]
    fn detached_base_still_reports_supports() {
        let profiles = ProfileRegistry::from_generated();
        let config = InteractionConfig::default();
        let mut book = DeskObject::new(1, "book", Vec3::new(0.0, 0.1, 0.0));
        book.is_lifted = true;
        let objects = vec![book.clone(), DeskObject::new(2, "notebook", Vec3::new(0.0, 0.25, 0.0))];
        let ctx = StackContext::new(&profiles, &config, &objects);
        assert_eq!(ids(&ctx.find_direct_supports(&book)), vec![2]);
    }

    #[test]
    fn vertical_gap_and_footprint_both_required() {
        let profiles = ProfileRegistry::from_generated();
        let config = InteractionConfig::default();
        let book = DeskObject::new(1, "book", Vec3::new(0.0, 0.1, 0.0));
        let objects = vec![
            book.clone(),
            // floating too high above the top (0.25)
            DeskObject::new(2, "notebook", Vec3::new(0.0, 0.45, 0.0)),
            // right height, too far sideways: reach = (0.275 + 0.25) * 0.7 = 0.3675
            DeskObject::new(3, "notebook", Vec3::new(0.4, 0.25, 0.0)),
            // right height, inside reach
            DeskObject::new(4, "notebook", Vec3::new(0.3, 0.25, 0.0)),
        ];
        let ctx = StackContext::new(&profiles, &config, &objects);
        assert_eq!(ids(&ctx.find_direct_supports(&book)), vec![4]);
    }

    #[test]
    fn no_stacking_flag_is_opt_in() {
        let profiles = ProfileRegistry::from_generated();
        let laptop = DeskObject::new(1, "laptop", Vec3::ZERO);
        // laptop top = 0.04
        let objects = vec![laptop.clone(), DeskObject::new(2, "phone", Vec3::new(0.0, 0.04, 0.0))];

        let observed = InteractionConfig::default();
        let ctx = StackContext::new(&profiles, &observed, &objects);
        assert_eq!(ids(&ctx.find_direct_supports(&laptop)), vec![2]);

        let strict = InteractionConfig {
            respect_no_stacking_on_top: true,
            ..InteractionConfig::default()
        };
        let ctx = StackContext::new(&profiles, &strict, &objects);
        assert!(ctx.find_direct_supports(&laptop).is_empty());
    }
}
