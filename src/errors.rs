#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PortDirection {
    Input,
    Output,
}

impl std::fmt::Display for PortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => f.write_str("input"),
            Self::Output => f.write_str("output"),
        }
    }
}

/// Anything that can go wrong talking to a MIDI device.
///
/// The effect engine itself never fails; these only come out of the transport.
#[derive(Debug)]
pub enum MidiError {
    InitError(midir::InitError),
    PortInfoError(midir::PortInfoError),
    ConnectError {
        port: String,
        kind: midir::ConnectErrorKind,
    },
    SendError(midir::SendError),
    NoPortFound {
        direction: PortDirection,
        // The keyword that was searched for
        keyword: String,
    },
}

impl std::fmt::Display for MidiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InitError(_) => f.write_str("MIDI context initialization failed"),
            Self::PortInfoError(_) => f.write_str("MIDI port retrieval failed"),
            Self::ConnectError { port, kind } => {
                write!(f, "connecting to MIDI port {:?} failed ({:?})", port, kind)
            }
            Self::SendError(_) => f.write_str("sending MIDI message failed"),
            Self::NoPortFound { direction, keyword } => {
                write!(f, "couldn't find a MIDI {} port matching {:?}", direction, keyword)
            }
        }
    }
}

impl std::error::Error for MidiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InitError(e) => Some(e),
            Self::PortInfoError(e) => Some(e),
            Self::SendError(e) => Some(e),
            Self::ConnectError { .. } | Self::NoPortFound { .. } => None,
        }
    }
}

impl From<midir::InitError> for MidiError {
    fn from(e: midir::InitError) -> Self {
        Self::InitError(e)
    }
}

impl From<midir::PortInfoError> for MidiError {
    fn from(e: midir::PortInfoError) -> Self {
        Self::PortInfoError(e)
    }
}

impl From<midir::SendError> for MidiError {
    fn from(e: midir::SendError) -> Self {
        Self::SendError(e)
    }
}
