//! Case-insensitive substring filtering.

use parkwatch_core::ParkingEvent;

/// Substring criteria applied to spot and device ids.
///
/// Matching lowercases both sides. Absent or empty criteria match
/// everything; when both are set an event must satisfy both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Substring the spot id must contain.
    pub spot_id_substring: Option<String>,
    /// Substring the device id must contain.
    pub device_id_substring: Option<String>,
}

impl FilterCriteria {
    /// Criteria that match every event.
    pub fn any() -> Self {
        Self::default()
    }

    /// Sets the spot id substring.
    pub fn spot_id(mut self, substring: impl Into<String>) -> Self {
        self.spot_id_substring = Some(substring.into());
        self
    }

    /// Sets the device id substring.
    pub fn device_id(mut self, substring: impl Into<String>) -> Self {
        self.device_id_substring = Some(substring.into());
        self
    }

    /// Returns true if these criteria let every event through.
    pub fn is_empty(&self) -> bool {
        needle(&self.spot_id_substring).is_none() && needle(&self.device_id_substring).is_none()
    }

    /// Returns true if `event` satisfies every set criterion.
    pub fn matches(&self, event: &ParkingEvent) -> bool {
        Matcher::new(self).matches(event)
    }
}

/// Lowercased needles, computed once per filter call.
struct Matcher {
    spot: Option<String>,
    device: Option<String>,
}

impl Matcher {
    fn new(criteria: &FilterCriteria) -> Self {
        Self {
            spot: needle(&criteria.spot_id_substring),
            device: needle(&criteria.device_id_substring),
        }
    }

    fn matches(&self, event: &ParkingEvent) -> bool {
        contains(event.parking_spot_id.as_str(), self.spot.as_deref())
            && contains(event.device_id.as_str(), self.device.as_deref())
    }
}

fn needle(criterion: &Option<String>) -> Option<String> {
    criterion
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

fn contains(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(needle),
        None => true,
    }
}

/// Keeps the entries matching `criteria`, preserving their relative order.
pub fn filter(entries: &[ParkingEvent], criteria: &FilterCriteria) -> Vec<ParkingEvent> {
    if criteria.is_empty() {
        return entries.to_vec();
    }
    let matcher = Matcher::new(criteria);
    entries
        .iter()
        .filter(|e| matcher.matches(e))
        .cloned()
        .collect()
}
