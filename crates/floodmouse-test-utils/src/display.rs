use floodmouse_core::{Color, Direction, DisplayCoord, InterfaceError};

/// Everything sent over the visualization channel.
///
/// With `fail` set every call is rejected (and not recorded), for
/// checking that display errors never abort a run.
#[derive(Clone, Debug, Default)]
pub struct DisplayLog {
    pub colors: Vec<(DisplayCoord, Color)>,
    pub texts: Vec<(DisplayCoord, String)>,
    pub walls: Vec<(DisplayCoord, Direction)>,
    pub fail: bool,
}

impl DisplayLog {
    fn check(&self, op: &'static str) -> Result<(), InterfaceError> {
        if self.fail {
            return Err(InterfaceError::Protocol {
                op,
                response: "display offline".into(),
            });
        }
        Ok(())
    }

    pub fn set_color(&mut self, at: DisplayCoord, color: Color) -> Result<(), InterfaceError> {
        self.check("setColor")?;
        self.colors.push((at, color));
        Ok(())
    }

    pub fn set_text(&mut self, at: DisplayCoord, text: &str) -> Result<(), InterfaceError> {
        self.check("setText")?;
        self.texts.push((at, text.to_string()));
        Ok(())
    }

    pub fn set_wall(&mut self, at: DisplayCoord, side: Direction) -> Result<(), InterfaceError> {
        self.check("setWall")?;
        self.walls.push((at, side));
        Ok(())
    }
}
