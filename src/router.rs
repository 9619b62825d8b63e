//! Console routes and navigation
//!
//! Every screen of the console has a path. Protected paths go through the
//! session guard before they render; `/login` is the only open one.

use std::fmt;
use std::sync::Mutex;

/// Path of the sign-in screen
pub const LOGIN_PATH: &str = "/login";

/// Known console locations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Root,
    Categories,
    Suppliers,
    Products,
    Offers,
    Movements,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => LOGIN_PATH,
            Route::Root => "/",
            Route::Categories => "/categorias",
            Route::Suppliers => "/proveedores",
            Route::Products => "/productos",
            Route::Offers => "/ofertas",
            Route::Movements => "/movimientos",
        }
    }

    /// Map a path to a route. Unknown paths land on the root.
    pub fn resolve(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        match normalized {
            LOGIN_PATH => Route::Login,
            "/categorias" => Route::Categories,
            "/proveedores" => Route::Suppliers,
            "/productos" => Route::Products,
            "/ofertas" => Route::Offers,
            "/movimientos" => Route::Movements,
            _ => Route::Root,
        }
    }

    /// Root has no screen of its own and forwards to its index child.
    pub fn landing(self) -> Route {
        match self {
            Route::Root => Route::Categories,
            other => other,
        }
    }

    pub fn is_protected(self) -> bool {
        self != Route::Login
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Client-side navigation target for forced redirects.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigator that remembers the last forced redirect so the command loop
/// can act on it once the failing call has returned.
#[derive(Debug, Default)]
pub struct SessionNavigator {
    pending: Mutex<Option<String>>,
}

impl SessionNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending redirect, leaving none behind.
    pub fn take_pending(&self) -> Option<String> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner()).take()
    }
}

impl Navigator for SessionNavigator {
    fn navigate(&self, path: &str) {
        log::debug!("Navigating to {}", path);
        *self.pending.lock().unwrap_or_else(|e| e.into_inner()) = Some(path.to_string());
    }
}
