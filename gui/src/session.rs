use life_engine::{Controller, Grid, PatternEditor};

/// Either the drawing phase or the simulation phase, never both.
#[derive(Debug)]
pub struct Session {
    editor: Option<PatternEditor>,
    controller: Option<Controller>,
    history_limit: Option<usize>,
}

impl Session {
    pub fn drawing(editor: PatternEditor, history_limit: Option<usize>) -> Self {
        Session {
            editor: Some(editor),
            controller: None,
            history_limit,
        }
    }

    pub fn simulating(controller: Controller) -> Self {
        Session {
            editor: None,
            controller: Some(controller),
            history_limit: None,
        }
    }

    pub fn grid(&self) -> Option<&Grid> {
        match (&self.editor, &self.controller) {
            (Some(editor), _) => Some(editor.grid()),
            (None, Some(controller)) => Some(controller.current_grid()),
            (None, None) => None,
        }
    }

    pub fn editor_mut(&mut self) -> Option<&mut PatternEditor> {
        self.editor.as_mut()
    }

    pub fn controller(&self) -> Option<&Controller> {
        self.controller.as_ref()
    }

    pub fn controller_mut(&mut self) -> Option<&mut Controller> {
        self.controller.as_mut()
    }

    /// Moves the drawn grid into a fresh controller. No-op once simulating.
    pub fn start_simulation(&mut self) {
        let Some(editor) = self.editor.take() else {
            return;
        };
        let mut controller = Controller::new(editor.finish());
        if let Some(limit) = self.history_limit {
            controller = controller.with_history_limit(limit);
        }
        log::info!("drawing finished, simulation starts paused");
        self.controller = Some(controller);
    }

    /// Called from the ticker thread.
    pub fn tick(&mut self) -> bool {
        self.controller.as_mut().is_some_and(|controller| controller.tick())
    }
}
