//! Export the scene as a standalone Rust + raylib program.
//!
//! Every object becomes a position variable drawn as a red circle; the first
//! object is the player and moves with the arrow keys.

#[cfg(test)]
#[path = "codegen_test.rs"]
mod codegen_test;

use std::collections::HashSet;

use stage::scene::GameObject;

const WINDOW: (u32, u32) = (800, 600);
const RADIUS: f64 = 20.0;

/// Turn an object name into a unique snake-case identifier.
fn identifier(name: &str, taken: &mut HashSet<String>) -> String {
    let mut ident: String = name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    let base = ident.clone();
    let mut n = 2;
    while !taken.insert(ident.clone()) {
        ident = format!("{base}_{n}");
        n += 1;
    }
    ident
}

/// Lines of the generated program.
#[must_use]
pub fn generate(objects: &[GameObject], speed: f64) -> Vec<String> {
    let mut taken = HashSet::new();
    let idents: Vec<String> = objects.iter().map(|o| identifier(&o.name, &mut taken)).collect();

    let mut out = vec![
        "use raylib::prelude::*;".to_string(),
        String::new(),
        "fn main() {".to_string(),
        format!("    let (mut rl, thread) = raylib::init().size({}, {}).title(\"Scene\").build();", WINDOW.0, WINDOW.1),
        "    rl.set_target_fps(60);".to_string(),
        String::new(),
        "    // Game objects generated from editor".to_string(),
    ];

    for (i, (obj, ident)) in objects.iter().zip(&idents).enumerate() {
        let binding = if i == 0 { "let mut" } else { "let" };
        let pos = obj.transform.position;
        out.push(format!("    // {}", obj.name));
        out.push(format!("    {binding} {ident}_pos = Vector2::new({:?}, {:?});", pos.x, pos.y));
        if i == 0 {
            out.push(format!("    let {ident}_speed = {speed:?};"));
        }
    }

    out.push(String::new());
    out.push("    while !rl.window_should_close() {".to_string());
    if let Some(player) = idents.first() {
        for (key, axis, op) in [("LEFT", "x", "-="), ("RIGHT", "x", "+="), ("UP", "y", "-="), ("DOWN", "y", "+=")] {
            out.push(format!(
                "        if rl.is_key_down(KeyboardKey::KEY_{key}) {{ {player}_pos.{axis} {op} {player}_speed; }}"
            ));
        }
        out.push(String::new());
    }
    out.push("        let mut d = rl.begin_drawing(&thread);".to_string());
    out.push("        d.clear_background(Color::new(50, 50, 50, 255));".to_string());
    for ident in &idents {
        out.push(format!("        d.draw_circle_v({ident}_pos, {RADIUS:?}, Color::RED);"));
    }
    out.push("    }".to_string());
    out.push("}".to_string());
    out
}
