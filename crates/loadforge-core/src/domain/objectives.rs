//! User objectives for a loadout search.

use crate::error::{LoadForgeError, Result};

use super::piece::CharacterClass;
use super::stats::{StatKind, Stats, STAT_COUNT};

/// Default cap on exotic pieces in one build.
pub const DEFAULT_MAX_EXOTICS: u32 = 1;

/// What the caller wants out of a search.
///
/// Built through validated constructors, so a value of this type always has
/// exactly six non-negative priorities.
///
/// # Examples
///
/// ```
/// use loadforge_core::{CharacterClass, Objectives, StatKind};
///
/// let objectives = Objectives::new(CharacterClass::Warlock)
///     .with_priorities(&[0, 0, 100, 0, 60, 0])
///     .unwrap()
///     .with_masterwork(true);
///
/// assert_eq!(objectives.priority().get(StatKind::Recovery), 100);
/// assert_eq!(objectives.max_exotics(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Objectives {
    target_class: CharacterClass,
    priority: Stats,
    max_exotics: u32,
    minimum_tier: Option<u32>,
    assume_masterwork: bool,
}

impl Objectives {
    /// Objectives with no stat targets, one exotic allowed and no masterwork.
    pub fn new(target_class: CharacterClass) -> Self {
        Self {
            target_class,
            priority: Stats::ZERO,
            max_exotics: DEFAULT_MAX_EXOTICS,
            minimum_tier: None,
            assume_masterwork: false,
        }
    }

    /// Sets all six stat targets from caller-supplied values.
    ///
    /// # Errors
    ///
    /// Returns [`LoadForgeError::InvalidInput`] when `values` does not have
    /// exactly six entries or any entry is negative or too large.
    pub fn with_priorities(mut self, values: &[i64]) -> Result<Self> {
        if values.len() != STAT_COUNT {
            return Err(LoadForgeError::InvalidInput(format!(
                "priority must have {} entries, got {}",
                STAT_COUNT,
                values.len()
            )));
        }
        let mut priority = [0u32; STAT_COUNT];
        for (i, value) in values.iter().enumerate() {
            if *value < 0 {
                return Err(LoadForgeError::InvalidInput(format!(
                    "priority[{i}] is negative: {value}"
                )));
            }
            priority[i] = u32::try_from(*value).map_err(|_| {
                LoadForgeError::InvalidInput(format!("priority[{i}] is too large: {value}"))
            })?;
        }
        self.priority = Stats::new(priority);
        Ok(self)
    }

    /// Sets a single stat target.
    pub fn with_minimum(mut self, kind: StatKind, value: u32) -> Self {
        self.priority = self.priority.with(kind, value);
        self
    }

    pub fn with_max_exotics(mut self, max_exotics: u32) -> Self {
        self.max_exotics = max_exotics;
        self
    }

    /// Only builds with at least this total tier are kept.
    pub fn with_minimum_tier(mut self, minimum_tier: Option<u32>) -> Self {
        self.minimum_tier = minimum_tier;
        self
    }

    pub fn with_masterwork(mut self, assume_masterwork: bool) -> Self {
        self.assume_masterwork = assume_masterwork;
        self
    }

    #[inline]
    pub fn target_class(&self) -> CharacterClass {
        self.target_class
    }

    /// Minimum desired value per stat; zero means "don't care".
    #[inline]
    pub fn priority(&self) -> &Stats {
        &self.priority
    }

    #[inline]
    pub fn max_exotics(&self) -> u32 {
        self.max_exotics
    }

    #[inline]
    pub fn minimum_tier(&self) -> Option<u32> {
        self.minimum_tier
    }

    #[inline]
    pub fn assume_masterwork(&self) -> bool {
        self.assume_masterwork
    }

    /// Stats with a non-zero target, paired with that target.
    pub fn prioritized(&self) -> impl Iterator<Item = (StatKind, u32)> + '_ {
        self.priority.iter().filter(|(_, target)| *target > 0)
    }
}

/// Unvalidated objectives as received from a caller.
///
/// Convert with `Objectives::try_from`, which applies the same checks as
/// [`Objectives::with_priorities`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectivesSpec {
    /// Raw catalog class tag.
    pub target_class: u8,
    pub priority: Vec<i64>,
    #[cfg_attr(feature = "serde", serde(default = "default_max_exotics"))]
    pub max_exotics: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub minimum_tier: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub assume_masterwork: bool,
}

#[cfg(feature = "serde")]
fn default_max_exotics() -> u32 {
    DEFAULT_MAX_EXOTICS
}

impl TryFrom<ObjectivesSpec> for Objectives {
    type Error = LoadForgeError;

    fn try_from(spec: ObjectivesSpec) -> Result<Self> {
        let target_class = CharacterClass::from_class_type(spec.target_class).ok_or_else(|| {
            LoadForgeError::InvalidInput(format!("unknown class type {}", spec.target_class))
        })?;
        Ok(Objectives::new(target_class)
            .with_priorities(&spec.priority)?
            .with_max_exotics(spec.max_exotics)
            .with_minimum_tier(spec.minimum_tier)
            .with_masterwork(spec.assume_masterwork))
    }
}
