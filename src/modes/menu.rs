/// Entries of the main menu, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Start,
    Upload,
    Edit,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Start,
        MenuItem::Upload,
        MenuItem::Edit,
        MenuItem::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Start => "START",
            MenuItem::Upload => "UPLOAD",
            MenuItem::Edit => "EDIT",
            MenuItem::Exit => "EXIT",
        }
    }

    pub fn index(self) -> usize {
        match self {
            MenuItem::Start => 0,
            MenuItem::Upload => 1,
            MenuItem::Edit => 2,
            MenuItem::Exit => 3,
        }
    }
}

/// Menu cursor, wrapping at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    selected: usize,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.selected]
    }

    pub fn select(&mut self, item: MenuItem) {
        self.selected = item.index();
    }

    pub fn up(&mut self) {
        let len = MenuItem::ALL.len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn down(&mut self) {
        self.selected = (self.selected + 1) % MenuItem::ALL.len();
    }
}
