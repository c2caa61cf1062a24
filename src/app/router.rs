//! Path-to-view routing.
//!
//! | path          | view                  |
//! |---------------|-----------------------|
//! | `/`           | redirect to `/login-page` |
//! | `/employees`  | employee list         |
//! | `/login-page` | login form            |
//! | anything else | not-found view        |
//!
//! Trailing slashes, query strings and fragments are ignored when matching.

use serde::Serialize;

pub const ROOT_PATH: &str = "/";
pub const EMPLOYEES_PATH: &str = "/employees";
pub const LOGIN_PATH: &str = "/login-page";

/// The view a path resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "path", rename_all = "camelCase")]
pub enum Route {
    EmployeeList,
    Login,
    /// Unknown path, kept for display.
    NotFound(String),
}

impl Route {
    /// Resolves a browser path, following the root redirect.
    ///
    /// Returns the route together with the canonical path the host should
    /// show in the address bar.
    #[must_use]
    pub fn resolve(path: &str) -> (Self, String) {
        let normalized = normalize(path);
        match normalized {
            ROOT_PATH | LOGIN_PATH => (Self::Login, LOGIN_PATH.to_string()),
            EMPLOYEES_PATH => (Self::EmployeeList, EMPLOYEES_PATH.to_string()),
            other => (Self::NotFound(other.to_string()), other.to_string()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::EmployeeList => EMPLOYEES_PATH,
            Self::Login => LOGIN_PATH,
            Self::NotFound(path) => path,
        }
    }

    #[must_use]
    pub const fn is_login(&self) -> bool {
        matches!(self, Self::Login)
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::Login
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        ROOT_PATH
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects_to_login() {
        assert_eq!(Route::resolve("/"), (Route::Login, LOGIN_PATH.to_string()));
        assert_eq!(Route::resolve(""), (Route::Login, LOGIN_PATH.to_string()));
    }

    #[test]
    fn test_known_paths() {
        assert_eq!(Route::resolve("/employees").0, Route::EmployeeList);
        assert_eq!(Route::resolve("/employees/?page=2").0, Route::EmployeeList);
        assert_eq!(Route::resolve("/login-page#top").0, Route::Login);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let (route, path) = Route::resolve("/payroll/");
        assert_eq!(route, Route::NotFound("/payroll".to_string()));
        assert_eq!(path, "/payroll");
        assert!(!route.is_login());
    }
}
