use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::profile::{ObjectPhysicsProfile, DEFAULT_PROFILE, PROFILE_DATA};

pub const PROFILE_BUNDLE_FORMAT_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile bundle is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported profile bundle format version: {0}")]
    UnsupportedVersion(u32),
    #[error("duplicate profile for type: {0}")]
    DuplicateType(String),
    #[error("profile {type_tag} has invalid {field}: {value}")]
    InvalidValue {
        type_tag: String,
        field: &'static str,
        value: f32,
    },
}

/// Type tag → physics profile table.
///
/// Lookups never fail: an unknown tag resolves to `fallback` so custom or unknown
/// object types still take part in stacking with neutral values.
#[derive(Clone, Debug)]
pub struct ProfileRegistry {
    profiles: Vec<ObjectPhysicsProfile>,
    type_to_index: HashMap<String, usize>,
    type_tags: Vec<String>,
    fallback: ObjectPhysicsProfile,
}

impl ProfileRegistry {
    pub fn from_bundle_json(json: &str) -> Result<Self, ProfileError> {
        let bundle: BundleRoot = serde_json::from_str(json)?;
        Self::from_bundle(bundle)
    }

    pub fn from_generated() -> Self {
        let mut registry = Self::empty(DEFAULT_PROFILE);
        for (tag, profile) in PROFILE_DATA.iter() {
            registry.insert(tag, *profile);
        }
        registry
    }

    fn empty(fallback: ObjectPhysicsProfile) -> Self {
        Self {
            profiles: Vec::new(),
            type_to_index: HashMap::new(),
            type_tags: Vec::new(),
            fallback,
        }
    }

    fn insert(&mut self, tag: &str, profile: ObjectPhysicsProfile) -> bool {
        if self.type_to_index.contains_key(tag) {
            return false;
        }
        self.type_to_index.insert(tag.to_string(), self.profiles.len());
        self.type_tags.push(tag.to_string());
        self.profiles.push(profile);
        true
    }

    /// Profile for `type_tag`, or the fallback profile on a miss.
    pub fn get(&self, type_tag: &str) -> &ObjectPhysicsProfile {
        match self.type_to_index.get(type_tag) {
            Some(&idx) => &self.profiles[idx],
            None => {
                trace!(type_tag, "unknown object type, using fallback profile");
                &self.fallback
            }
        }
    }

    pub fn contains(&self, type_tag: &str) -> bool {
        self.type_to_index.contains_key(type_tag)
    }

    pub fn fallback(&self) -> &ObjectPhysicsProfile {
        &self.fallback
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    pub fn manifest_json(&self) -> String {
        let out = ProfileManifest {
            format_version: PROFILE_BUNDLE_FORMAT_VERSION,
            types: &self.type_tags,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    fn from_bundle(bundle: BundleRoot) -> Result<Self, ProfileError> {
        if bundle.format_version != PROFILE_BUNDLE_FORMAT_VERSION {
            return Err(ProfileError::UnsupportedVersion(bundle.format_version));
        }

        let fallback = match bundle.fallback {
            Some(p) => validate("<fallback>", p.into_profile())?,
            None => DEFAULT_PROFILE,
        };

        let mut registry = Self::empty(fallback);
        for entry in bundle.profiles.into_iter() {
            let tag = entry.type_tag.clone();
            let profile = validate(&tag, entry.into_profile())?;
            if !registry.insert(&tag, profile) {
                return Err(ProfileError::DuplicateType(tag));
            }
        }

        debug!(profiles = registry.profile_count(), "loaded physics profile bundle");
        Ok(registry)
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::from_generated()
    }
}

fn validate(tag: &str, p: ObjectPhysicsProfile) -> Result<ObjectPhysicsProfile, ProfileError> {
    let invalid = |field: &'static str, value: f32| ProfileError::InvalidValue {
        type_tag: tag.to_string(),
        field,
        value,
    };

    if !p.weight.is_finite() || p.weight < 0.0 {
        return Err(invalid("weight", p.weight));
    }
    if !p.height.is_finite() || p.height < 0.0 {
        return Err(invalid("height", p.height));
    }
    if !p.base_offset.is_finite() {
        return Err(invalid("baseOffset", p.base_offset));
    }
    if !(0.0..=1.0).contains(&p.friction) {
        return Err(invalid("friction", p.friction));
    }
    Ok(p)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileManifest<'a> {
    format_version: u32,
    types: &'a [String],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    format_version: u32,
    #[serde(default)]
    fallback: Option<BundleProfile>,
    profiles: Vec<BundleEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleEntry {
    #[serde(rename = "type")]
    type_tag: String,
    #[serde(flatten)]
    profile: BundleProfile,
}

impl BundleEntry {
    fn into_profile(self) -> ObjectPhysicsProfile {
        self.profile.into_profile()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleProfile {
    weight: f32,
    #[serde(default = "default_stability")]
    stability: f32,
    height: f32,
    #[serde(default)]
    base_offset: f32,
    #[serde(default = "default_friction")]
    friction: f32,
    #[serde(default)]
    no_stacking_on_top: bool,
}

impl BundleProfile {
    fn into_profile(self) -> ObjectPhysicsProfile {
        ObjectPhysicsProfile {
            weight: self.weight,
            stability: self.stability,
            height: self.height,
            base_offset: self.base_offset,
            friction: self.friction,
            no_stacking_on_top: self.no_stacking_on_top,
        }
    }
}

fn default_stability() -> f32 {
    DEFAULT_PROFILE.stability
}

fn default_friction() -> f32 {
    DEFAULT_PROFILE.friction
}
