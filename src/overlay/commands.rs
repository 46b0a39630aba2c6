use egui::{Color32, Pos2, Rect, Stroke};

/// One drawing instruction for the overlay, in surface units.
///
/// Coordinates inside a `PushTransform`/`PopTransform` pair are expressed in
/// the pushed scale's space, exactly as a retained-mode drawing context would.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    RoundedRect {
        rect: Rect,
        corner_radius: f32,
        fill: Color32,
        stroke: Stroke,
    },
    PushTransform {
        scale: f32,
    },
    Text {
        text: String,
        anchor: Pos2,
        font_size: f32,
        color: Color32,
    },
    PopTransform,
}

/// Commands produced for a single frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The first text command, if any.
    pub fn text(&self) -> Option<&str> {
        self.commands.iter().find_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
