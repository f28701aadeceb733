//! Built-in catalog: a five-day week of eight courses for six groups.
use crate::catalog::{Catalog, Course, Day, SessionKind, TeacherAvailability};
use lazy_static::lazy_static;

use SessionKind::{Lab, Lecture, Recitation};

lazy_static! {
    pub static ref DEMO_CATALOG: Catalog = Catalog {
        courses: vec![
            Course::new(
                "Security",
                vec![Lecture, Recitation],
                TeacherAvailability::new("#FF9999")
                    .with(Lecture, &["Djebari"])
                    .with(Recitation, &["Djennane", "Kassa"]),
            ),
            Course::new(
                "FM",
                vec![Lecture, Recitation],
                TeacherAvailability::new("#99FF99")
                    .with(Lecture, &["Zedek"])
                    .with(Recitation, &["Zedek"]),
            ),
            Course::new(
                "NA",
                vec![Lecture, Recitation],
                TeacherAvailability::new("#9999FF")
                    .with(Lecture, &["Alkama"])
                    .with(Recitation, &["Alkama"]),
            ),
            Course::new(
                "Entrepreneurship",
                vec![Lecture],
                TeacherAvailability::new("#FFFF99").with(Lecture, &["Kaci"]),
            ),
            Course::new(
                "OR2",
                vec![Lecture, Recitation],
                TeacherAvailability::new("#99FFFF")
                    .with(Lecture, &["Issaadi"])
                    .with(Recitation, &["Issaadi"]),
            ),
            Course::new(
                "DA&IC",
                vec![Lecture, Recitation],
                TeacherAvailability::new("#FF99FF")
                    .with(Lecture, &["Djenadi"])
                    .with(Recitation, &["Djenadi"]),
            ),
            Course::new(
                "Networks2",
                vec![Lecture, Recitation, Lab],
                TeacherAvailability::new("#FFCC99")
                    .with(Lecture, &["Zenadji"])
                    .with(Recitation, &["Zenadji", "Sahli"])
                    .with(Lab, &["Zaidi"]),
            ),
            Course::new(
                "AI",
                vec![Lecture, Recitation, Lab],
                TeacherAvailability::new("#CC99FF")
                    .with(Lecture, &["Lekehali"])
                    .with(Recitation, &["Lekehali"])
                    .with(Lab, &["Hamma", "Bechar", "Abbas & Ladlani"]),
            ),
        ],
        groups: 6,
        days: vec![
            Day::new("Sunday", 5),
            Day::new("Monday", 5),
            Day::new("Tuesday", 3),
            Day::new("Wednesday", 5),
            Day::new("Thursday", 5),
        ],
    };
}
