// SPDX-License-Identifier: Apache-2.0
//
// PeerLink — native shell hosting a local web bundle.
//
// Entry point. Initialises logging, runs the permission gate, provisions the
// media directory, and hosts the bundle in a single webview wired to the
// script bridge and the file chooser relay.

mod data_dir;
mod platform;

use std::path::Path;
use std::rc::Rc;

use tao::event::{ElementState, Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy};
use tao::keyboard::Key;
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use peerlink_core::error::{PeerlinkError, Result};
use peerlink_core::ShellConfig;
use peerlink_shell::bridge::{BridgeAction, BridgeReply, BridgeRequest, ScriptBridge, INIT_SCRIPT};
use peerlink_shell::chooser::{DocumentPicker, FileChooserRelay};
use peerlink_shell::media::MediaLibrary;
use peerlink_shell::navigation::{BackAction, NavigationHistory};
use peerlink_shell::permissions::PermissionGate;

use platform::DesktopPlatform;

/// Events routed from webview callbacks back onto the event loop, where the
/// shell state lives.
#[derive(Debug)]
enum ShellEvent {
    /// A parsed script-bridge request from the hosted content.
    Bridge(BridgeRequest),
    /// A navigation the webview is about to commit.
    Navigated(String),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("PeerLink starting");

    if let Err(e) = run() {
        tracing::error!(error = %e, "shell failed to start");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let sandbox = data_dir::data_dir();
    let config = ShellConfig::load(&sandbox);
    let platform = DesktopPlatform::new(&sandbox);

    // Permission gate fires once per launch, before the webview comes up.
    PermissionGate::new().run(&platform, &platform);

    // Provision the media directory; failure is deliberately not surfaced.
    let media = MediaLibrary::new(&sandbox);
    media.provision();

    let bridge = ScriptBridge::new(media);

    let event_loop = EventLoopBuilder::<ShellEvent>::with_user_event().build();
    let window = WindowBuilder::new()
        .with_title(config.window_title.as_str())
        .with_maximized(true)
        .build(&event_loop)
        .map_err(|e| PeerlinkError::Window(e.to_string()))?;

    let proxy = event_loop.create_proxy();
    let webview = build_webview(&window, &config, &sandbox, bridge.clone(), proxy)?;
    let webview = Rc::new(webview);

    let mut relay = FileChooserRelay::new();
    let mut history = NavigationHistory::new();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => *control_flow = ControlFlow::Exit,

            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event: key, .. },
                ..
            } if key.state == ElementState::Pressed
                && matches!(key.logical_key, Key::BrowserBack | Key::GoBack) =>
            {
                // Back pops the shell's history first; only an empty history
                // falls through to exiting.
                match history.back() {
                    BackAction::Navigate(url) => load(&webview, &url),
                    BackAction::Exit => *control_flow = ControlFlow::Exit,
                }
            }

            Event::UserEvent(ShellEvent::Navigated(url)) => history.record(url),

            Event::UserEvent(ShellEvent::Bridge(request)) => match bridge.dispatch(request) {
                BridgeAction::Reply(reply) => deliver(&webview, &reply),
                BridgeAction::OpenChooser { id } => {
                    let wv = Rc::clone(&webview);
                    let pick_request = relay.begin(Box::new(move |selection| {
                        deliver(&wv, &BridgeReply::chooser(id, selection));
                    }));
                    let outcome = platform.pick(&pick_request);
                    relay.resolve(outcome);
                }
            },

            _ => {}
        }
    });
}

/// Configure and build the one webview the shell owns.
fn build_webview(
    window: &tao::window::Window,
    config: &ShellConfig,
    sandbox: &Path,
    bridge: ScriptBridge,
    proxy: EventLoopProxy<ShellEvent>,
) -> Result<wry::WebView> {
    let nav_proxy = proxy.clone();

    let builder = WebViewBuilder::new(window)
        .with_initialization_script(INIT_SCRIPT)
        .with_autoplay(config.autoplay)
        .with_devtools(config.devtools)
        // All navigation stays in this view.
        .with_navigation_handler(move |url| {
            let _ = nav_proxy.send_event(ShellEvent::Navigated(url));
            true
        })
        // No external browser handoff for window.open either.
        .with_new_window_req_handler(|url| {
            tracing::debug!(%url, "new-window request suppressed");
            false
        })
        .with_ipc_handler(move |message: wry::http::Request<String>| {
            match bridge.parse(message.body()) {
                Ok(request) => {
                    let _ = proxy.send_event(ShellEvent::Bridge(request));
                }
                Err(e) => tracing::warn!(error = %e, "dropping bridge message"),
            }
        });

    let builder = match resolve_entry(config, sandbox) {
        Some(url) => {
            tracing::info!(%url, "loading bundle entry point");
            builder.with_url(url)
        }
        None => {
            tracing::warn!("no bundle installed; loading placeholder page");
            builder.with_html(PLACEHOLDER_HTML)
        }
    };

    builder
        .build()
        .map_err(|e| PeerlinkError::WebView(e.to_string()))
}

/// Locate the bundle entry point: the configured override first, then the
/// conventional `<sandbox>/www/index.html`.
fn resolve_entry(config: &ShellConfig, sandbox: &Path) -> Option<String> {
    config
        .entry_point
        .clone()
        .into_iter()
        .chain(std::iter::once(sandbox.join("www").join("index.html")))
        .find(|path| path.is_file())
        .map(|path| format!("file://{}", path.display()))
}

/// Evaluate a bridge reply back into the page.
fn deliver(webview: &wry::WebView, reply: &BridgeReply) {
    if let Err(e) = webview.evaluate_script(&reply.to_script()) {
        tracing::warn!(error = %e, id = reply.id, "failed to deliver bridge reply");
    }
}

/// Load a URL into the webview without leaving the shell.
fn load(webview: &wry::WebView, url: &str) {
    let script = format!("window.location.replace({});", serde_json::json!(url));
    if let Err(e) = webview.evaluate_script(&script) {
        tracing::warn!(error = %e, %url, "failed to navigate back");
    }
}

/// Shown when no bundle is installed yet.
const PLACEHOLDER_HTML: &str = include_str!("../assets/placeholder.html");
