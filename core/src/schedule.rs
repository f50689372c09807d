/// Event schedule seed data (listing only)
use crate::types::ScheduleEvent;

fn entry(
    time: &str,
    end_time: &str,
    title: &str,
    speaker: &str,
    location: &str,
    description: &str,
) -> ScheduleEvent {
    ScheduleEvent {
        time: time.to_string(),
        end_time: end_time.to_string(),
        title: title.to_string(),
        speaker: speaker.to_string(),
        location: location.to_string(),
        description: description.to_string(),
    }
}

/// The day's sessions, in chronological order.
pub fn event_schedule() -> Vec<ScheduleEvent> {
    vec![
        entry(
            "09:00 AM",
            "10:00 AM",
            "Opening Keynote: The Future of Connected Technology",
            "Jane Doe, CEO of TechCorp",
            "Main Auditorium",
            "Join us for an inspiring look into the next decade of technological innovation and how it will shape our world.",
        ),
        entry(
            "10:30 AM",
            "11:30 AM",
            "Deep Dive into Generative AI",
            "Alex Johnson",
            "Hall A, Room 101",
            "An expert session on the latest advancements in generative models, their applications, and ethical considerations. (AI/ML)",
        ),
        entry(
            "10:30 AM",
            "11:30 AM",
            "Modern Frontend Frameworks in 2024",
            "Chris Lee",
            "Hall B, Room 202",
            "A comparative analysis of the leading frontend frameworks and a live coding session to build a reactive component. (Web Development)",
        ),
        entry(
            "12:00 PM",
            "01:00 PM",
            "Lunch & Networking",
            "All Attendees",
            "Exhibition Hall",
            "Grab a bite, recharge, and connect with fellow attendees and speakers.",
        ),
        entry(
            "01:30 PM",
            "02:30 PM",
            "Designing for Emotion: A UX Workshop",
            "Diana Prince",
            "Hall C, Workshop Zone",
            "An interactive workshop focusing on user-centric design principles that create delightful and memorable experiences. (UX/UI Design)",
        ),
        entry(
            "01:30 PM",
            "02:30 PM",
            "The Zero Trust Security Model",
            "Edward Nigma",
            "Hall A, Room 102",
            "Learn how to implement a Zero Trust architecture to secure your organization's data and infrastructure in a perimeter-less world. (Cybersecurity)",
        ),
        entry(
            "03:00 PM",
            "04:00 PM",
            "Decentralized Finance (DeFi) Explained",
            "Fiona Glenanne",
            "Hall B, Room 203",
            "A comprehensive overview of the DeFi ecosystem, its core components, and the potential to revolutionize finance. (Blockchain)",
        ),
        entry(
            "04:30 PM",
            "05:00 PM",
            "Closing Remarks & Future Outlook",
            "Event Organizers",
            "Main Auditorium",
            "A recap of the day's highlights and a look forward to the future of the industry and our community.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_shape() {
        let schedule = event_schedule();
        assert_eq!(schedule.len(), 8);
        assert_eq!(schedule[0].location, "Main Auditorium");
        assert!(schedule.iter().all(|e| !e.title.is_empty()));
    }
}
