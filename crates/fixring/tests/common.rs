#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

/// Shared record of which [`Tracked`] values have been dropped, in order.
#[derive(Debug, Clone, Default)]
pub struct DropLog(Rc<RefCell<Vec<&'static str>>>);

impl DropLog {
    pub fn item(&self, name: &'static str) -> Tracked {
        Tracked {
            name,
            log: self.clone(),
        }
    }

    pub fn dropped(&self) -> Vec<&'static str> {
        self.0.borrow().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.0.borrow().iter().filter(|n| **n == name).count()
    }
}

/// A value that logs its own drop.
#[derive(Debug)]
pub struct Tracked {
    pub name: &'static str,
    log: DropLog,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.log.item(self.name)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.0.borrow_mut().push(self.name);
    }
}
