/// Keys the menu and the presenters react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
    /// Ctrl-C, which raw mode delivers as a key instead of a signal.
    Interrupt,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AverageTemperature,
    LundRainfall,
    ListTemperatures,
    Exit,
}

impl MenuAction {
    /// Menu entries in display order; `Exit` is always last.
    pub const ALL: [MenuAction; 4] = [
        MenuAction::AverageTemperature,
        MenuAction::LundRainfall,
        MenuAction::ListTemperatures,
        MenuAction::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::AverageTemperature => "Current Average Temperature in Sweden",
            MenuAction::LundRainfall => "Rainfall in Lund last month",
            MenuAction::ListTemperatures => "Print temperature of all stations",
            MenuAction::Exit => "Exit",
        }
    }
}

/// Selection state of the main menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    index: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn selected(&self) -> MenuAction {
        MenuAction::ALL[self.index]
    }

    pub fn up(&mut self) {
        self.index = self.index.checked_sub(1).unwrap_or(MenuAction::ALL.len() - 1);
    }

    pub fn down(&mut self) {
        self.index = (self.index + 1) % MenuAction::ALL.len();
    }

    /// Apply one key press. Enter yields the highlighted action, Ctrl-C yields
    /// `Exit`, arrows move the selection with wrap-around, anything else is ignored.
    pub fn handle(&mut self, key: Key) -> Option<MenuAction> {
        match key {
            Key::Up => self.up(),
            Key::Down => self.down(),
            Key::Enter => return Some(self.selected()),
            Key::Interrupt => return Some(MenuAction::Exit),
            Key::Escape | Key::Other => {}
        }
        None
    }

    /// Labels paired with whether they are highlighted.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        (0..MenuAction::ALL.len()).map(move |i| (MenuAction::ALL[i].label(), i == self.index))
    }
}
