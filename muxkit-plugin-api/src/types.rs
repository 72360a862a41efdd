//! Plugin descriptor types

use serde::{Deserialize, Serialize};

use crate::command::CommandEntry;
use crate::context::{FormatContext, NotifyEntry};

/// Display name used for a composite descriptor
pub const MULTI_DISPLAY_NAME: &str = "...";

/// Display name used for a notification plugin that listens to every event
pub const WILDCARD_DISPLAY_NAME: &str = "*";

/// One extension point provided by a plugin library.
///
/// Descriptors are plain data with `'static` strings and function pointers so
/// that a library can export one as a `static`.
#[derive(Debug, Clone, Copy)]
pub enum Plugin {
    /// A new host command
    Command(CommandEntry),
    /// A new format variable
    Format(FormatPlugin),
    /// A function callable inside format expressions
    FormatFunction(FormatFunctionPlugin),
    /// A listener for host events
    Notification(NotificationPlugin),
    /// Several descriptors registered together, in order
    Multi(&'static [Plugin]),
}

/// Provides the value of the format variable `name`
#[derive(Debug, Clone, Copy)]
pub struct FormatPlugin {
    pub name: &'static str,
    pub cb: fn(&FormatContext) -> String,
}

/// A function usable as `#{f:name:...}` in format expressions
#[derive(Debug, Clone, Copy)]
pub struct FormatFunctionPlugin {
    pub name: &'static str,
    pub cb: fn(&str) -> String,
}

/// Called for host events named `event`, or for every event when `None`
#[derive(Debug, Clone, Copy)]
pub struct NotificationPlugin {
    pub event: Option<&'static str>,
    pub cb: fn(&NotifyEntry),
}

impl NotificationPlugin {
    /// Whether this listener wants the event called `name`
    pub fn wants(&self, name: &str) -> bool {
        self.event.is_none_or(|event| event == name)
    }
}

/// Kind tag of a [`Plugin`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginKind {
    Command,
    Format,
    FormatFunction,
    Notification,
    Multi,
}

impl PluginKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Format => "format",
            Self::FormatFunction => "format_function",
            Self::Notification => "notification",
            Self::Multi => "multi",
        }
    }
}

impl std::fmt::Display for PluginKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Plugin {
    /// A command descriptor
    pub const fn command(entry: CommandEntry) -> Self {
        Self::Command(entry)
    }

    /// A format variable descriptor
    pub const fn format(name: &'static str, cb: fn(&FormatContext) -> String) -> Self {
        Self::Format(FormatPlugin { name, cb })
    }

    /// A format function descriptor
    pub const fn format_function(name: &'static str, cb: fn(&str) -> String) -> Self {
        Self::FormatFunction(FormatFunctionPlugin { name, cb })
    }

    /// A notification descriptor for one event, or all events with `None`
    pub const fn notification(event: Option<&'static str>, cb: fn(&NotifyEntry)) -> Self {
        Self::Notification(NotificationPlugin { event, cb })
    }

    /// A composite of several descriptors
    pub const fn multi(children: &'static [Plugin]) -> Self {
        Self::Multi(children)
    }

    /// Kind tag of this descriptor
    pub fn kind(&self) -> PluginKind {
        match self {
            Self::Command(_) => PluginKind::Command,
            Self::Format(_) => PluginKind::Format,
            Self::FormatFunction(_) => PluginKind::FormatFunction,
            Self::Notification(_) => PluginKind::Notification,
            Self::Multi(_) => PluginKind::Multi,
        }
    }

    /// Name shown when listing registered plugins
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Command(entry) => entry.name,
            Self::Format(format) => format.name,
            Self::FormatFunction(function) => function.name,
            Self::Notification(notification) => {
                notification.event.unwrap_or(WILDCARD_DISPLAY_NAME)
            }
            Self::Multi(_) => MULTI_DISPLAY_NAME,
        }
    }

    /// Whether this descriptor is a composite
    pub fn is_multi(&self) -> bool {
        matches!(self, Self::Multi(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{ArgBounds, CommandReturn};
    use crate::context::{CommandArgs, CommandContext};

    fn exec(_args: &CommandArgs, _ctx: &mut CommandContext) -> CommandReturn {
        CommandReturn::Normal
    }

    fn shell(ctx: &FormatContext) -> String {
        ctx.get("shell").unwrap_or_default().to_string()
    }

    fn reverse(arg: &str) -> String {
        arg.chars().rev().collect()
    }

    fn ignore(_entry: &NotifyEntry) {}

    const PRINT: Plugin = Plugin::command(CommandEntry {
        name: "print",
        alias: Some("pr"),
        args: ArgBounds::exactly(2),
        usage: "filename text",
        exec,
    });

    static CHILDREN: [Plugin; 2] = [
        Plugin::format("pane_shell", shell),
        Plugin::format_function("reverse", reverse),
    ];

    #[test]
    fn test_kind_of_each_variant() {
        assert_eq!(PRINT.kind(), PluginKind::Command);
        assert_eq!(CHILDREN[0].kind(), PluginKind::Format);
        assert_eq!(CHILDREN[1].kind(), PluginKind::FormatFunction);
        assert_eq!(
            Plugin::notification(None, ignore).kind(),
            PluginKind::Notification
        );
        assert_eq!(Plugin::multi(&CHILDREN).kind(), PluginKind::Multi);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PRINT.display_name(), "print");
        assert_eq!(CHILDREN[0].display_name(), "pane_shell");
        assert_eq!(CHILDREN[1].display_name(), "reverse");
        assert_eq!(
            Plugin::notification(Some("window-renamed"), ignore).display_name(),
            "window-renamed"
        );
        assert_eq!(Plugin::notification(None, ignore).display_name(), "*");
        assert_eq!(Plugin::multi(&CHILDREN).display_name(), "...");
    }

    #[test]
    fn test_notification_wants() {
        let Plugin::Notification(any) = Plugin::notification(None, ignore) else {
            panic!("Expected Notification variant");
        };
        let Plugin::Notification(renamed) = Plugin::notification(Some("window-renamed"), ignore)
        else {
            panic!("Expected Notification variant");
        };

        assert!(any.wants("session-created"));
        assert!(renamed.wants("window-renamed"));
        assert!(!renamed.wants("window-renamed-extra"));
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&PluginKind::FormatFunction).unwrap();
        assert_eq!(json, "\"format_function\"");
        assert_eq!(PluginKind::FormatFunction.to_string(), "format_function");
    }

    #[test]
    fn test_is_multi() {
        assert!(Plugin::multi(&[]).is_multi());
        assert!(!PRINT.is_multi());
    }
}
