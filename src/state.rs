//! Per-page view-model state machines.
//!
//! Each page holds one of these in a signal and mutates it through the
//! transition methods. Every transition is guarded: fired in a state where
//! it does not apply, it leaves the machine unchanged. That guard is also
//! what neutralizes late responses — a reply landing after the machine has
//! already moved on (cancelled form, errored load) cannot clobber newer
//! state.

use itens_client::Item;

/// State of the `/itens` list screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    LoadError,
    Loaded { itens: Vec<Item> },
    Creating { itens: Vec<Item> },
    Saving { itens: Vec<Item> },
    CreateError { itens: Vec<Item> },
    Created { itens: Vec<Item> },
}

impl ListState {
    pub fn load_ok(&mut self, itens: Vec<Item>) {
        if matches!(self, ListState::Loading) {
            *self = ListState::Loaded { itens };
        }
    }

    pub fn load_err(&mut self) {
        if matches!(self, ListState::Loading) {
            *self = ListState::LoadError;
        }
    }

    /// Open the create form.
    pub fn new_item(&mut self) {
        if let ListState::Loaded { itens } | ListState::Created { itens } = self {
            *self = ListState::Creating {
                itens: std::mem::take(itens),
            };
        }
    }

    /// Close the create form without submitting.
    pub fn cancel(&mut self) {
        if let ListState::Creating { itens } | ListState::CreateError { itens } = self {
            *self = ListState::Loaded {
                itens: std::mem::take(itens),
            };
        }
    }

    /// The create request is in flight.
    pub fn begin_save(&mut self) {
        if let ListState::Creating { itens } | ListState::CreateError { itens } = self {
            *self = ListState::Saving {
                itens: std::mem::take(itens),
            };
        }
    }

    /// The server created `item`; it joins the locally held list.
    pub fn create_ok(&mut self, item: Item) {
        if let ListState::Saving { itens } = self {
            let mut itens = std::mem::take(itens);
            itens.push(item);
            *self = ListState::Created { itens };
        }
    }

    pub fn create_err(&mut self) {
        if let ListState::Saving { itens } = self {
            *self = ListState::CreateError {
                itens: std::mem::take(itens),
            };
        }
    }

    /// The locally held list, in any state that carries one.
    pub fn itens(&self) -> Option<&[Item]> {
        match self {
            ListState::Loaded { itens }
            | ListState::Creating { itens }
            | ListState::Saving { itens }
            | ListState::CreateError { itens }
            | ListState::Created { itens } => Some(itens),
            ListState::Loading | ListState::LoadError => None,
        }
    }

    pub fn shows_itens(&self) -> bool {
        matches!(
            self,
            ListState::Loaded { .. } | ListState::Creating { .. } | ListState::Created { .. }
        )
    }

    pub fn shows_form(&self) -> bool {
        matches!(self, ListState::Creating { .. } | ListState::CreateError { .. })
    }

    pub fn shows_new_button(&self) -> bool {
        matches!(self, ListState::Loaded { .. } | ListState::Created { .. })
    }
}

/// State of the `/itens/:id` detail screen.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    LoadError,
    Loaded { item: Item },
    Editing { item: Item },
    Saving { item: Item },
    SaveError { item: Item },
    Saved { item: Item },
    Removing { item: Item },
    RemoveError { item: Item },
    Removed,
}

impl DetailState {
    pub fn load_ok(&mut self, item: Item) {
        if matches!(self, DetailState::Loading) {
            *self = DetailState::Loaded { item };
        }
    }

    pub fn load_err(&mut self) {
        if matches!(self, DetailState::Loading) {
            *self = DetailState::LoadError;
        }
    }

    /// Open the edit form over the held item.
    pub fn edit(&mut self) {
        if let DetailState::Loaded { item } | DetailState::Saved { item } = self {
            *self = DetailState::Editing {
                item: take_item(item),
            };
        }
    }

    /// Close the edit form without submitting; the held item stands.
    pub fn cancel(&mut self) {
        if let DetailState::Editing { item } | DetailState::SaveError { item } = self {
            *self = DetailState::Loaded {
                item: take_item(item),
            };
        }
    }

    /// The update request is in flight; the held item stays until it lands.
    pub fn begin_save(&mut self) {
        if let DetailState::Editing { item } | DetailState::SaveError { item } = self {
            *self = DetailState::Saving {
                item: take_item(item),
            };
        }
    }

    /// The server accepted the draft; it replaces the held item.
    pub fn save_ok(&mut self, novo: Item) {
        if matches!(self, DetailState::Saving { .. }) {
            *self = DetailState::Saved { item: novo };
        }
    }

    /// Save failed; the previously loaded item is untouched.
    pub fn save_err(&mut self) {
        if let DetailState::Saving { item } = self {
            *self = DetailState::SaveError {
                item: take_item(item),
            };
        }
    }

    pub fn begin_remove(&mut self) {
        if let DetailState::Loaded { item } | DetailState::Saved { item } = self {
            *self = DetailState::Removing {
                item: take_item(item),
            };
        }
    }

    /// Terminal: no item data survives a successful remove.
    pub fn remove_ok(&mut self) {
        if matches!(self, DetailState::Removing { .. }) {
            *self = DetailState::Removed;
        }
    }

    pub fn remove_err(&mut self) {
        if let DetailState::Removing { item } = self {
            *self = DetailState::RemoveError {
                item: take_item(item),
            };
        }
    }

    /// The held item, in any state that carries one.
    pub fn item(&self) -> Option<&Item> {
        match self {
            DetailState::Loaded { item }
            | DetailState::Editing { item }
            | DetailState::Saving { item }
            | DetailState::SaveError { item }
            | DetailState::Saved { item }
            | DetailState::Removing { item }
            | DetailState::RemoveError { item } => Some(item),
            DetailState::Loading | DetailState::LoadError | DetailState::Removed => None,
        }
    }

    pub fn shows_item(&self) -> bool {
        matches!(self, DetailState::Loaded { .. } | DetailState::Saved { .. })
    }

    pub fn shows_form(&self) -> bool {
        matches!(self, DetailState::Editing { .. } | DetailState::SaveError { .. })
    }
}

fn take_item(item: &mut Item) -> Item {
    std::mem::replace(
        item,
        Item {
            id: 0,
            nome: String::new(),
            descricao: String::new(),
        },
    )
}
