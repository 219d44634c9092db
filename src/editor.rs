//! Top-level editor: owns the scene and every panel, dispatches host input,
//! runs commands, and draws the frame.
//!
//! Each host event is offered to every component, the way a window system
//! broadcasts to its children. The inspector goes first: while one of its
//! text fields owns the keyboard, the global shortcuts (Escape, Delete,
//! Space) are not applied. Widgets emit [`Command`]s instead of calling back;
//! commands are executed after the event has been delivered everywhere.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use stage::engine::SceneView;
use stage::geom::{Rect, Vec2};
use stage::input::{InputEvent, Key, PointerState};
use stage::inspector::Inspector;
use stage::render::{Surface, TextMetrics};
use stage::scene::{GameObject, ObjectId, Scene};
use stage::theme;
use stage::widget::{Button, Widget, draw_panel_chrome};

use crate::codegen;
use crate::config::{ConfigError, EditorConfig, Layout};
use crate::console::Console;
use crate::hierarchy::Hierarchy;

const TITLE: &str = "Scene Editor";
const TITLE_FONT_PX: f64 = 24.0;
const RULE_WIDTH: usize = 50;

/// Where new objects appear.
pub const SPAWN_POINT: Vec2 = Vec2::new(100.0, 100.0);

/// Objects present when the editor starts.
pub const SAMPLE_OBJECTS: [(&str, Vec2); 3] =
    [("Player", Vec2::new(0.0, 0.0)), ("Enemy", Vec2::new(100.0, -50.0)), ("Item", Vec2::new(-80.0, 60.0))];

/// Something the user asked the editor to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddObject,
    DeleteSelected,
    TogglePlay,
    ShowCode,
    Select(ObjectId),
    Quit,
}

/// Arrow keys held this frame, polled by the host.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    /// Unit direction per axis, screen-down positive.
    #[must_use]
    pub fn direction(self) -> Vec2 {
        let axis = |neg: bool, pos: bool| f64::from(i8::from(pos) - i8::from(neg));
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

/// Pointer shape the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Default,
    ResizeHorizontal,
}

pub struct Editor {
    config: EditorConfig,
    layout: Layout,
    scene: Scene,
    view: SceneView,
    inspector: Inspector,
    hierarchy: Hierarchy,
    console: Console,
    add_button: Button<Command>,
    play_button: Button<Command>,
    code_button: Button<Command>,
    next_object: u32,
    playing: bool,
    running: bool,
}

impl Editor {
    /// Build the editor for a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`EditorConfig::validate`].
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        let layout = config.validate()?;
        let mut view = SceneView::new(layout.scene);
        view.show_grid = !config.hide_grid;
        view.show_origin = !config.hide_origin;

        let mut editor = Self {
            scene: Scene::new(),
            view,
            inspector: Inspector::new(layout.inspector),
            hierarchy: Hierarchy::new(layout.hierarchy),
            console: Console::new(),
            add_button: Button::new(Rect::new(150.0, 5.0, 30.0, 30.0), "+", Command::AddObject),
            play_button: Button::new(Rect::new(190.0, 5.0, 60.0, 30.0), "Play", Command::TogglePlay),
            code_button: Button::new(Rect::new(260.0, 5.0, 60.0, 30.0), "Code", Command::ShowCode),
            next_object: 1,
            playing: false,
            running: true,
            config,
            layout,
        };
        if !editor.config.empty {
            for (name, at) in SAMPLE_OBJECTS {
                editor.scene.add_object(GameObject::new(name).at(at));
            }
        }
        editor.hierarchy.sync(&editor.scene);
        tracing::info!(
            width = editor.config.width,
            height = editor.config.height,
            fps = editor.config.fps,
            "editor configured"
        );
        editor.console.log("Scene editor started");
        Ok(editor)
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    #[must_use]
    pub fn view(&self) -> &SceneView {
        &self.view
    }

    #[must_use]
    pub fn inspector(&self) -> &Inspector {
        &self.inspector
    }

    #[must_use]
    pub fn console(&self) -> &Console {
        &self.console
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// False once the user asked to quit.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn cursor(&self) -> CursorShape {
        if self.inspector.wants_resize_cursor() { CursorShape::ResizeHorizontal } else { CursorShape::Default }
    }

    // --- Input ---

    /// Deliver one host event to every component, then run the commands it produced.
    pub fn handle_event(&mut self, event: &InputEvent, metrics: &dyn TextMetrics) {
        let mut commands = Vec::new();

        let typing = self.inspector.handle_input(event, &mut self.scene);
        for button in [&mut self.add_button, &mut self.play_button, &mut self.code_button] {
            button.handle_input(event, &mut commands);
        }
        self.hierarchy.handle_input(event, &mut commands);
        for action in self.view.handle_event(event, &mut self.scene, metrics) {
            tracing::trace!(?action, "scene view");
        }

        match event {
            InputEvent::CloseRequested => commands.push(Command::Quit),
            InputEvent::KeyDown(key) if !typing => match key.key {
                Key::Escape => commands.push(Command::Quit),
                Key::Delete => commands.push(Command::DeleteSelected),
                Key::Space if !self.playing => commands.push(Command::TogglePlay),
                _ => {}
            },
            _ => {}
        }

        for command in commands {
            self.execute(command);
        }
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::AddObject => self.add_object(),
            Command::DeleteSelected => self.delete_selected(),
            Command::TogglePlay => self.toggle_play(),
            Command::ShowCode => self.show_code(),
            Command::Select(id) => self.scene.select_object(Some(id)),
            Command::Quit => {
                tracing::info!("quit requested");
                self.running = false;
            }
        }
    }

    fn add_object(&mut self) {
        let name = format!("GameObject_{}", self.next_object);
        self.next_object += 1;
        self.scene.add_object(GameObject::new(name.clone()).at(SPAWN_POINT));
        self.console.log(format!("Added {name}"));
    }

    fn delete_selected(&mut self) {
        let removed = self.scene.selected().and_then(|id| self.scene.remove_object(id));
        match removed {
            Some(obj) => self.console.log(format!("Deleted {}", obj.name)),
            None => self.console.log("No object selected"),
        }
    }

    fn toggle_play(&mut self) {
        self.playing = !self.playing;
        self.view.set_playing(self.playing);
        if self.playing {
            self.play_button.set_label("Stop");
            self.console.log("Entering Play Mode");
            let first = self.scene.first().map(GameObject::id);
            self.scene.select_object(first);
        } else {
            self.play_button.set_label("Play");
            self.console.log("Exiting Play Mode");
            self.scene.select_object(None);
        }
    }

    fn show_code(&mut self) {
        let lines = codegen::generate(self.scene.objects(), self.config.play_speed);
        let rule = "=".repeat(RULE_WIDTH);
        self.console.log("Generated Rust Code:");
        self.console.log(rule.clone());
        for line in lines.into_iter().filter(|l| !l.trim().is_empty()) {
            self.console.log(line);
        }
        self.console.log(rule);
    }

    // --- Frame ---

    /// Per-frame update after the event queue is drained.
    pub fn update(&mut self, pointer: &PointerState, keys: HeldKeys, dt: f64) {
        for button in [&mut self.add_button, &mut self.play_button, &mut self.code_button] {
            button.update(pointer, dt);
        }
        self.hierarchy.sync(&self.scene);
        self.hierarchy.update(pointer, dt);
        self.view.update(pointer);

        if self.playing {
            let step = keys.direction() * self.config.play_speed;
            if let Some(obj) = self.scene.selected_object_mut() {
                obj.transform.position += step;
            }
        }

        self.inspector.sync(&self.scene, pointer, dt);
    }

    pub fn draw(&mut self, surface: &mut dyn Surface) {
        surface.fill_rect(self.layout.window, theme::BACKGROUND);

        draw_panel_chrome(surface, self.layout.menu, "");
        surface.text(Vec2::new(10.0, 10.0), TITLE, TITLE_FONT_PX, theme::TEXT);
        self.add_button.draw(surface);
        self.play_button.draw(surface);
        self.code_button.draw(surface);
        if self.playing {
            let at = Vec2::new(self.layout.window.right() - 150.0, 10.0);
            surface.text(at, "PLAY MODE", TITLE_FONT_PX, theme::SELECTION);
        }

        self.hierarchy.draw(surface);
        self.view.draw(&self.scene, surface);
        self.inspector.draw(&self.scene, surface);
        self.console.draw(surface, self.layout.console);
    }
}
