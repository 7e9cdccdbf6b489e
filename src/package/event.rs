/// A state change worth reporting, attributed to one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Installed(String),
    AlreadyInstalled(String),
    NotInstalled(String),
    Removed(String),
    NoLongerNeeded(String),
}

impl Event {
    pub fn package(&self) -> &str {
        match self {
            Event::Installed(name)
            | Event::AlreadyInstalled(name)
            | Event::NotInstalled(name)
            | Event::Removed(name)
            | Event::NoLongerNeeded(name) => name,
        }
    }
}
