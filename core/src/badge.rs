/// Badge classification: attendance count -> tier
///
/// Inclusive lower thresholds: Newcomer [0,2), Bronze [2,5), Silver [5,10),
/// Gold [10,20), Platinum [20,∞).
use crate::types::Badge;

pub fn badge_for_events(events_attended: u32) -> Badge {
    if events_attended >= 20 {
        return Badge::Platinum;
    }
    if events_attended >= 10 {
        return Badge::Gold;
    }
    if events_attended >= 5 {
        return Badge::Silver;
    }
    if events_attended >= 2 {
        return Badge::Bronze;
    }
    Badge::Newcomer
}
