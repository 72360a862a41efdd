//! End-to-end tests for the plugin registry
//!
//! These tests drive the public API the way a host does:
//! - Registration of composites through the host context
//! - Dispatch of format functions, notifications and commands
//! - Directory scans that must never fail on foreign files

use std::cell::RefCell;

use muxkit_core::{CommandTable, FormatTable, PluginHost, PluginHostConfig};
use muxkit_plugin_api::{
    ArgBounds, CommandArgs, CommandContext, CommandEntry, CommandReturn, FormatContext,
    NotifyEntry, Plugin, PluginKind,
};
use tempfile::TempDir;

thread_local! {
    static EVENTS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

fn reverse(arg: &str) -> String {
    arg.chars().rev().collect()
}

fn trim(arg: &str) -> String {
    arg.trim().to_string()
}

fn pane_shell(ctx: &FormatContext) -> String {
    ctx.get("shell").unwrap_or("").to_string()
}

fn smiley(entry: &NotifyEntry) {
    EVENTS.with(|events| {
        let window = entry.window.as_deref().unwrap_or("");
        events.borrow_mut().push(format!("{window} :-)"));
    });
}

fn audit(entry: &NotifyEntry) {
    EVENTS.with(|events| events.borrow_mut().push(format!("audit {}", entry.name)));
}

fn print(args: &CommandArgs, ctx: &mut CommandContext) -> CommandReturn {
    let (Some(file), Some(text)) = (args.get(0), args.get(1)) else {
        return CommandReturn::Error;
    };
    ctx.print(format!("{file}: {text}"));
    CommandReturn::Normal
}

static FUNCTIONS: [Plugin; 2] = [
    Plugin::format_function("reverse", reverse),
    Plugin::format_function("trim", trim),
];

static BUNDLE: [Plugin; 4] = [
    Plugin::command(CommandEntry {
        name: "print",
        alias: Some("pr"),
        args: ArgBounds::exactly(2),
        usage: "filename text",
        exec: print,
    }),
    Plugin::format("pane_shell", pane_shell),
    Plugin::multi(&FUNCTIONS),
    Plugin::notification(Some("window-renamed"), smiley),
];

fn host_with_bundle() -> PluginHost {
    let mut host = PluginHost::new();
    host.register(Plugin::multi(&BUNDLE));
    host.register(Plugin::notification(None, audit));
    host
}

#[test]
fn bundle_is_flattened_in_order() {
    let host = host_with_bundle();

    assert_eq!(host.store().len(), 6);
    assert_eq!(
        host.plugin_list(),
        "print,pane_shell,reverse,trim,window-renamed,*"
    );
}

#[test]
fn many_registrations_survive_growth() {
    let mut host = PluginHost::new();
    for _ in 0..100 {
        host.register(Plugin::multi(&FUNCTIONS));
    }

    assert_eq!(host.store().len(), 200);
    assert!(host.store().capacity() >= 200);
    for (index, plugin) in host.store().iter().enumerate() {
        let expected = if index % 2 == 0 { "reverse" } else { "trim" };
        assert_eq!(plugin.display_name(), expected);
    }
}

#[test]
fn format_functions_dispatch_by_name() {
    let host = host_with_bundle();

    assert_eq!(host.call_function("reverse", "abc"), "cba");
    assert_eq!(host.call_function("trim", "  padded  "), "padded");
    assert_eq!(host.call_function("upper", "abc"), "");
}

#[test]
fn notifications_fan_out_to_matching_listeners() {
    let host = host_with_bundle();
    EVENTS.with(|events| events.borrow_mut().clear());

    let mut renamed = NotifyEntry::new("window-renamed");
    renamed.window = Some("editor".to_string());
    host.notify(&renamed);
    host.notify(&NotifyEntry::new("session-created"));

    let events = EVENTS.with(|events| events.borrow().clone());
    assert_eq!(
        events,
        vec![
            "editor :-)",
            "audit window-renamed",
            "audit session-created"
        ]
    );
}

#[test]
fn kind_enumeration_feeds_host_tables() {
    let host = host_with_bundle();
    let store = host.store();

    let first = store.find_first_of_kind(PluginKind::FormatFunction);
    assert_eq!(first, Some(2));
    assert_eq!(store.find_next_of_kind(PluginKind::FormatFunction, 2), Some(3));
    assert_eq!(store.find_next_of_kind(PluginKind::FormatFunction, 3), None);

    let commands = CommandTable::from_store(store);
    let mut ctx = CommandContext::new();
    let args: CommandArgs = ["out.txt", "hello"].into_iter().collect();
    let result = commands.execute("pr", &args, &mut ctx).unwrap();
    assert_eq!(result, CommandReturn::Normal);
    assert_eq!(ctx.output(), ["out.txt: hello"]);

    let formats = FormatTable::from_store(store);
    let format_ctx: FormatContext = [("shell", "/bin/fish")].into_iter().collect();
    assert_eq!(
        formats.value("pane_shell", &format_ctx),
        Some("/bin/fish".to_string())
    );
}

#[test]
fn init_tolerates_directories_full_of_non_plugins() {
    let dir = TempDir::new().unwrap();
    let system = dir.path().join("system");
    std::fs::create_dir(&system).unwrap();
    std::fs::write(system.join("a.so"), b"garbage").unwrap();
    std::fs::write(system.join("b.txt"), b"notes").unwrap();
    std::fs::write(system.join(".hidden.so"), b"").unwrap();

    let config = PluginHostConfig {
        system_plugin_dir: Some(system),
        user_plugin_dir: Some(dir.path().join("missing")),
        extra_plugin_dirs: Vec::new(),
    };
    let host = PluginHost::init(&config);

    assert!(host.store().is_empty());
    assert_eq!(host.library_count(), 0);
    assert_eq!(host.plugin_list(), "");
}
