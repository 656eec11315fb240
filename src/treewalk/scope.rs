use std::collections::HashMap;

use log::debug;

use crate::{core::Container, treewalk::TreewalkValue};

/// A symbol table plus a link to the scope it is nested in. Blocks and calls each get a fresh
/// child; closures hold on to the scope they were defined in.
#[derive(Debug, Default)]
pub struct Scope {
    symbol_table: HashMap<String, TreewalkValue>,
    enclosing: Option<Container<Scope>>,
}

impl Scope {
    pub fn child_of(enclosing: &Container<Scope>) -> Container<Self> {
        Container::new(Self {
            symbol_table: HashMap::new(),
            enclosing: Some(enclosing.clone()),
        })
    }

    /// Bind `name` in this scope, shadowing any outer binding.
    pub fn declare(&mut self, name: &str, value: TreewalkValue) {
        debug!("declare {name}");
        self.symbol_table.insert(name.to_string(), value);
    }

    /// Rebind `name` in the nearest scope which already has it. When no scope in the chain does,
    /// the name is created here.
    pub fn assign(&mut self, name: &str, value: TreewalkValue) {
        if !self.symbol_table.contains_key(name) {
            if let Some(enclosing) = &self.enclosing {
                if enclosing.borrow().has(name) {
                    enclosing.borrow_mut().assign(name, value);
                    return;
                }
            }
        }

        debug!("assign {name}");
        self.symbol_table.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<TreewalkValue> {
        match self.symbol_table.get(name) {
            Some(value) => Some(value.clone()),
            None => self
                .enclosing
                .as_ref()
                .and_then(|enclosing| enclosing.borrow().get(name)),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.symbol_table.contains_key(name)
            || self
                .enclosing
                .as_ref()
                .is_some_and(|enclosing| enclosing.borrow().has(name))
    }

    /// Names bound directly in this scope, ignoring anything it is nested in.
    #[cfg(test)]
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.symbol_table.keys().cloned().collect();
        names.sort();
        names
    }
}
