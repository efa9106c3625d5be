//! Skiff - Main Application Entry Point
//!
//! One window: a menu bar, a toolbar, an address bar and a single WebKit
//! view. Every widget callback posts a [`UserEvent`] to the event loop, which
//! owns the [`BrowserShell`] and applies the events one at a time.

mod engine;
mod menu;
mod ui;

use engine::WryEngine;
use gtk::prelude::*;
use menu::{AppMenu, MenuAction};
use muda::MenuEvent;
use skiff_core::{ShellCommand, ShellConfig, SkiffError, SkiffResult};
use skiff_shell::BrowserShell;
use tao::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
    platform::unix::WindowExtUnix,
    window::WindowBuilder,
};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use ui::GtkDisplay;

/// Events posted from widget and engine callbacks
#[derive(Debug)]
pub enum UserEvent {
    /// Toolbar button clicked
    Command(ShellCommand),
    /// Enter pressed in the address bar
    AddressActivated,
    /// The engine's URI changed
    UriChanged,
    Menu(MenuEvent),
}

fn init_logging() -> SkiffResult<()> {
    tracing_log::LogTracer::init().map_err(anyhow::Error::from)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber).map_err(anyhow::Error::from)?;
    Ok(())
}

fn load_config() -> ShellConfig {
    let path = ShellConfig::config_path();
    match ShellConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring config at {}: {}", path.display(), e);
            ShellConfig::default()
        }
    }
}

fn run(config: ShellConfig) -> SkiffResult<()> {
    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(&config.window_title)
        .with_inner_size(LogicalSize::new(config.window_width, config.window_height))
        .build(&event_loop)
        .map_err(|e| SkiffError::window(e.to_string()))?;
    let main_window_id = window.id();

    let app_menu = AppMenu::install(&window)?;
    let menu_proxy = proxy.clone();
    MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
        let _ = menu_proxy.send_event(UserEvent::Menu(event));
    }));

    let vbox = window
        .default_vbox()
        .ok_or_else(|| SkiffError::window("window has no GTK container"))?;
    let display = GtkDisplay::build(vbox, &proxy);
    let engine = WryEngine::build(vbox, &config)?;
    vbox.show_all();

    let uri_proxy = proxy.clone();
    let mut shell = BrowserShell::new(
        display,
        engine,
        Box::new(move || {
            let _ = uri_proxy.send_event(UserEvent::UriChanged);
        }),
    );

    info!("Window created successfully");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                window_id,
                ..
            } if window_id == main_window_id => {
                info!("Main window close requested, shutting down...");
                *control_flow = ControlFlow::Exit;
            }
            Event::UserEvent(user_event) => match user_event {
                UserEvent::Command(command) => {
                    debug!("Toolbar: {:?}", command);
                    shell.dispatch(command);
                }
                UserEvent::AddressActivated => shell.navigate_from_address_bar(),
                UserEvent::UriChanged => shell.on_uri_changed(),
                UserEvent::Menu(event) => match app_menu.action_for(event.id()) {
                    Some(MenuAction::Command(command)) => shell.dispatch(command),
                    Some(MenuAction::FocusAddressBar) => shell.display().focus_address_bar(),
                    Some(MenuAction::Quit) => {
                        info!("Quit requested, shutting down...");
                        *control_flow = ControlFlow::Exit;
                    }
                    None => debug!("Unhandled menu event: {:?}", event.id()),
                },
            },
            _ => {}
        }

        // Keep the window alive for as long as the loop runs
        let _ = &window;
    })
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!("Starting Skiff...");
    let config = load_config();

    if let Err(e) = run(config) {
        error!("Failed to start: {}", e);
        std::process::exit(1);
    }
}
