use crate::domain::DeskObject;

use super::StackContext;

/// Footprints must overlap this much (on squared distance) before a dropped
/// object lands on another instead of the desk.
const LANDING_OVERLAP: f32 = 0.5;

impl<'a> StackContext<'a> {
    /// Y the object would settle at if released at its current planar position.
    ///
    /// Lands on the highest non-detached object under it whose profile allows
    /// stacking, otherwise on the desk surface. The object's own seating offset
    /// is added in both cases.
    pub fn resting_height(&self, object: &DeskObject) -> f32 {
        let seat = self.profile(object).base_offset * object.scale;
        let radius = self.interaction_radius(object);
        let mut highest = self.config.desk_surface_y + seat;

        for other in self.objects.iter() {
            if other.id == object.id || other.is_detached() {
                continue;
            }

            let other_profile = self.profile(other);
            if other_profile.no_stacking_on_top {
                continue;
            }

            let combined = radius + self.interaction_radius(other);
            let dx = object.position.x - other.position.x;
            let dz = object.position.z - other.position.z;
            if dx * dx + dz * dz < combined * combined * LANDING_OVERLAP {
                let stack_y = other.position.y + other_profile.height + seat;
                if stack_y > highest {
                    highest = stack_y;
                }
            }
        }

        highest
    }
}
