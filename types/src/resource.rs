use std::fmt;

use uuid::Uuid;

/// The kinds of emulated resources a check creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Queue,
    Stream,
    Table,
    Bucket,
    Topic,
    Parameter,
    Secret,
    Function,
    User,
}

impl ResourceKind {
    /// Prefix prepended to every generated name of this kind.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Queue => "test-q-",
            Self::Stream | Self::Table | Self::Secret => "test-s-",
            Self::Bucket => "test-b-",
            Self::Topic => "test-t-",
            Self::Parameter => "param-",
            Self::Function => "test-f-",
            Self::User => "",
        }
    }
}

/// A resource name unique to one test invocation.
///
/// Names are lowercase and at most 44 characters, so the same value is a
/// valid queue, bucket, table, topic or user name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName {
    kind: ResourceKind,
    name: String,
}

impl ResourceName {
    /// Generate a fresh name for the given kind.
    #[must_use]
    pub fn generate(kind: ResourceKind) -> Self {
        Self {
            kind,
            name: format!("{}{}", kind.prefix(), Uuid::now_v7().hyphenated()),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl From<ResourceName> for String {
    fn from(name: ResourceName) -> Self {
        name.name
    }
}
