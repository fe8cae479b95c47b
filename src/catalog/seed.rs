//! Built-in sample catalog
//!
//! The six-event seed data standing in for a remote event source. In a
//! production deployment this boundary would be a read API.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use crate::models::{Event, EventCategory};

fn event(
    id: &str,
    title: &str,
    description: &str,
    date: (i32, u32, u32),
    time: (u32, u32),
    venue: &str,
    category: EventCategory,
    max_participants: u32,
    current_participants: u32,
    tags: &[&str],
    organizer: &str,
    published: (i32, u32, u32),
) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid seed date"),
        time: NaiveTime::from_hms_opt(time.0, time.1, 0).expect("valid seed time"),
        venue: venue.to_string(),
        category,
        max_participants,
        current_participants,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image: None,
        organizer: organizer.to_string(),
        created_at: Utc
            .with_ymd_and_hms(published.0, published.1, published.2, 9, 0, 0)
            .single()
            .expect("valid seed timestamp"),
    }
}

/// The sample event catalog. Publication timestamps follow the order the
/// events were added, so the `newest` sort matches the catalog's history.
pub fn seed_events() -> Vec<Event> {
    vec![
        event(
            "1",
            "AI & Machine Learning Workshop",
            "Learn the fundamentals of AI and machine learning with hands-on coding exercises. \
             Perfect for beginners and intermediate students.",
            (2024, 3, 15),
            (14, 0),
            "Computer Science Lab A",
            EventCategory::Tech,
            30,
            23,
            &["AI", "Machine Learning", "Python", "Programming"],
            "CS Department",
            (2024, 2, 1),
        ),
        event(
            "2",
            "Campus Basketball Tournament",
            "Annual inter-department basketball championship. Registration closes soon!",
            (2024, 3, 18),
            (16, 0),
            "Main Sports Arena",
            EventCategory::Sports,
            64,
            45,
            &["Basketball", "Tournament", "Inter-department"],
            "Sports Committee",
            (2024, 2, 5),
        ),
        event(
            "3",
            "Digital Marketing Seminar",
            "Industry experts share insights on modern digital marketing strategies and social \
             media management.",
            (2024, 3, 20),
            (10, 0),
            "Business School Auditorium",
            EventCategory::Seminar,
            100,
            67,
            &["Marketing", "Digital", "Business", "Career"],
            "Business School",
            (2024, 2, 9),
        ),
        event(
            "4",
            "Creative Writing Workshop",
            "Enhance your writing skills with published authors. Bring your creative pieces for \
             feedback.",
            (2024, 3, 22),
            (15, 30),
            "Library Conference Room",
            EventCategory::Workshop,
            20,
            14,
            &["Writing", "Creative", "Literature"],
            "English Department",
            (2024, 2, 13),
        ),
        event(
            "5",
            "Cultural Night 2024",
            "Celebrate diversity with performances, food, and cultural exhibitions from around \
             the world.",
            (2024, 3, 25),
            (18, 0),
            "Main Campus Grounds",
            EventCategory::Social,
            500,
            234,
            &["Culture", "Performance", "Food", "International"],
            "Student Union",
            (2024, 2, 17),
        ),
        event(
            "6",
            "Quantum Physics Symposium",
            "Deep dive into quantum mechanics and its applications in modern technology.",
            (2024, 3, 28),
            (11, 0),
            "Physics Department",
            EventCategory::Academic,
            50,
            28,
            &["Physics", "Quantum", "Science", "Research"],
            "Physics Department",
            (2024, 2, 21),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_shape() {
        let events = seed_events();
        assert_eq!(events.len(), 6);

        // Ids are unique and capacity counters respect their caps.
        let mut ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);

        for event in &events {
            assert!(event.current_participants <= event.max_participants);
            assert!(event.max_participants > 0);
        }
    }

    #[test]
    fn test_seed_publication_order_follows_ids() {
        let events = seed_events();
        for pair in events.windows(2) {
            assert!(pair[0].created_at < pair[1].created_at);
        }
    }
}
