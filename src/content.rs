//! Festival content shown by the display.
//!
//! Immutable literal lists consumed read-only by rendering. Not part of any
//! engineering core: editing the fest lineup means editing these slices.

/// One entry in the day-of event schedule.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleEvent {
    pub time: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// The day-of event schedule, in order.
pub const SCHEDULE: &[ScheduleEvent] = &[
    ScheduleEvent {
        time: "10:00 AM",
        title: "Opening Ceremony",
        description: "Kickstarting the fest with an electrifying opening ceremony.",
    },
    ScheduleEvent {
        time: "12:00 PM",
        title: "Robotics Competition",
        description: "Witness the clash of titans in the robotics arena.",
    },
    ScheduleEvent {
        time: "02:00 PM",
        title: "Hackathon",
        description: "Coders race against time to build innovative solutions.",
    },
    ScheduleEvent {
        time: "04:00 PM",
        title: "Guest Lecture",
        description: "An inspiring talk by a renowned industry expert.",
    },
    ScheduleEvent {
        time: "06:00 PM",
        title: "Cultural Night",
        description: "A vibrant evening of music, dance, and drama.",
    },
];

/// Sponsor roll, in display order.
pub const SPONSORS: &[&str] = &[
    "TechCorp",
    "InnovateLabs",
    "DigitalWave",
    "FutureTech",
    "CodeCraft",
    "PixelPro",
    "DevStudio",
    "CloudNine",
];
