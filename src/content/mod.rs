//! Read-only fixture content for the prop
//!
//! Everything the phone displays is fixed at build time: the conversations,
//! notes, call log, recordings, and gallery tiles that carry the mystery's
//! clues. The navigation state machine never touches this data; screens
//! receive it as plain slices.

/// Identifier of a fixed conversation thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationId {
    Unknown,
    Meenakshi,
}

/// One message inside a conversation.
pub struct Message {
    pub text: &'static str,
    /// Sent from this phone (right-aligned) rather than received.
    pub sent: bool,
    pub time: &'static str,
}

/// A fixed, named thread of messages.
pub struct Conversation {
    pub id: ConversationId,
    pub name: &'static str,
    pub preview: &'static str,
    pub time: &'static str,
    pub unread: bool,
    pub messages: &'static [Message],
}

pub static CONVERSATIONS: &[Conversation] = &[
    Conversation {
        id: ConversationId::Unknown,
        name: "Unknown Number",
        preview: "I KNOW YOUR SECRET...",
        time: "10:47 PM",
        unread: true,
        messages: &[Message {
            text: "I KNOW YOUR SECRET AND I WON'T LET YOU GO",
            sent: true,
            time: "10:47 PM",
        }],
    },
    Conversation {
        id: ConversationId::Meenakshi,
        name: "Meenakshi",
        preview: "SORRY I SHOULDN'T HAVE...",
        time: "8:23 PM",
        unread: true,
        messages: &[Message {
            text: "SORRY I SHOULDN'T HAVE HACKED YOUR PHONE",
            sent: false,
            time: "8:23 PM",
        }],
    },
];

impl ConversationId {
    /// Look up the thread for this identifier.
    pub fn conversation(self) -> &'static Conversation {
        CONVERSATIONS
            .iter()
            .find(|c| c.id == self)
            .unwrap_or(&CONVERSATIONS[0])
    }
}

/// A note in the notes app.
pub struct Note {
    pub title: &'static str,
    pub content: &'static str,
    pub date: &'static str,
}

pub static NOTES: &[Note] = &[
    Note {
        title: "I can't trust anyone anymore",
        content: "Someone knows what I did. They're watching me. I need to be careful.",
        date: "Nov 20",
    },
    Note {
        title: "Meeting at 11 PM",
        content: "Unknown caller wants to meet. Should I go? This feels dangerous.",
        date: "Nov 21",
    },
];

/// Direction of a call-log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Missed,
    Incoming,
    Outgoing,
}

/// One entry in the recent-calls list.
pub struct CallEntry {
    pub name: &'static str,
    pub kind: CallKind,
    pub time: &'static str,
    pub duration: &'static str,
}

pub static CALLS: &[CallEntry] = &[
    CallEntry {
        name: "Unknown Number",
        kind: CallKind::Missed,
        time: "10:52 PM",
        duration: "Not answered",
    },
    CallEntry {
        name: "Meenakshi",
        kind: CallKind::Incoming,
        time: "8:15 PM",
        duration: "3:42",
    },
    CallEntry {
        name: "Unknown Number",
        kind: CallKind::Outgoing,
        time: "7:30 PM",
        duration: "1:15",
    },
];

/// A saved voice recording.
pub struct Recording {
    pub title: &'static str,
    pub duration: &'static str,
    pub date: &'static str,
    pub corrupted: bool,
}

pub static RECORDINGS: &[Recording] = &[
    Recording {
        title: "Conversation with Unknown",
        duration: "2:34",
        date: "Nov 21, 10:50 PM",
        corrupted: false,
    },
    Recording {
        title: "Deleted Recording",
        duration: "Unknown",
        date: "Nov 20, 11:15 PM",
        corrupted: true,
    },
];

/// Visual tone of a gallery tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoTone {
    Danger,
    Neutral,
    Info,
}

/// A tile in the gallery grid. The images themselves are "lost"; only the
/// metadata survives, which is the clue.
pub struct Photo {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tone: PhotoTone,
}

pub static PHOTOS: &[Photo] = &[
    Photo {
        title: "Deleted Photo",
        subtitle: "Recovery Failed",
        tone: PhotoTone::Danger,
    },
    Photo {
        title: "Unknown Location",
        subtitle: "Nov 21, 10:45 PM",
        tone: PhotoTone::Neutral,
    },
    Photo {
        title: "Screenshot",
        subtitle: "Encrypted Message",
        tone: PhotoTone::Info,
    },
];

/// Apps the home grid can launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTarget {
    Phone,
    Messages,
    Gallery,
    Notes,
    Recorder,
}

/// One icon on the home screen. Most apps are set dressing; only the five
/// with a target open anything.
pub struct HomeApp {
    pub name: &'static str,
    pub target: Option<AppTarget>,
}

pub static HOME_APPS: &[HomeApp] = &[
    HomeApp {
        name: "Phone",
        target: Some(AppTarget::Phone),
    },
    HomeApp {
        name: "Messages",
        target: Some(AppTarget::Messages),
    },
    HomeApp {
        name: "Camera",
        target: None,
    },
    HomeApp {
        name: "Gallery",
        target: Some(AppTarget::Gallery),
    },
    HomeApp {
        name: "Notes",
        target: Some(AppTarget::Notes),
    },
    HomeApp {
        name: "Chrome",
        target: None,
    },
    HomeApp {
        name: "YouTube",
        target: None,
    },
    HomeApp {
        name: "Instagram",
        target: None,
    },
    HomeApp {
        name: "WhatsApp",
        target: None,
    },
    HomeApp {
        name: "Settings",
        target: None,
    },
    HomeApp {
        name: "Recorder",
        target: Some(AppTarget::Recorder),
    },
];

/// Fixed device vitals shown in the status bar and home widgets.
pub struct DeviceStatus {
    pub battery_percent: u8,
    pub wifi_connected: bool,
}

pub const DEVICE: DeviceStatus = DeviceStatus {
    battery_percent: 47,
    wifi_connected: true,
};

/// The lock-screen notification card.
pub struct LockNotification {
    pub title: &'static str,
    pub preview: &'static str,
}

pub const LOCK_NOTIFICATION: LockNotification = LockNotification {
    title: "Messages",
    preview: "2 new messages",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_lookup_matches_id() {
        assert_eq!(ConversationId::Meenakshi.conversation().name, "Meenakshi");
        assert_eq!(
            ConversationId::Unknown.conversation().name,
            "Unknown Number"
        );
    }

    #[test]
    fn every_conversation_has_messages() {
        for conversation in CONVERSATIONS {
            assert!(!conversation.messages.is_empty());
        }
    }

    #[test]
    fn home_grid_has_five_working_apps() {
        let working = HOME_APPS.iter().filter(|a| a.target.is_some()).count();
        assert_eq!(working, 5);
    }
}
