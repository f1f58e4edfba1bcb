use std::fmt;

/// WebSocket close codes sent when a location channel is refused or torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseCode {
    /// Unexpected failure while serving the channel.
    Internal,
    /// No valid credentials on the handshake.
    Unauthenticated,
    /// Plan missing or the user is not one of its participants.
    NotParticipant,
}

impl CloseCode {
    pub fn code(self) -> u16 {
        match self {
            Self::Internal => 4000,
            Self::Unauthenticated => 4001,
            Self::NotParticipant => 4003,
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            4000 => Some(Self::Internal),
            4001 => Some(Self::Unauthenticated),
            4003 => Some(Self::NotParticipant),
            _ => None,
        }
    }
}

impl fmt::Display for CloseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
