//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::{Contact, CreateAccount, Dashboard, Home, Layout, Login};

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/create-account")]
    CreateAccount {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/contact")]
    Contact {},
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_paths_parse_to_their_pages() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home {});
        assert_eq!("/login".parse::<Route>().unwrap(), Route::Login {});
        assert_eq!(
            "/create-account".parse::<Route>().unwrap(),
            Route::CreateAccount {}
        );
        assert_eq!("/dashboard".parse::<Route>().unwrap(), Route::Dashboard {});
        assert_eq!("/contact".parse::<Route>().unwrap(), Route::Contact {});
    }

    #[test]
    fn pages_display_as_their_declared_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Login {}.to_string(), "/login");
        assert_eq!(Route::CreateAccount {}.to_string(), "/create-account");
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
        assert_eq!(Route::Contact {}.to_string(), "/contact");
    }

    #[test]
    fn undeclared_paths_do_not_match() {
        assert!("/unknown".parse::<Route>().is_err());
        assert!("/logins".parse::<Route>().is_err());
        assert!("/login/reset".parse::<Route>().is_err());
        assert!("/dashboard/overview".parse::<Route>().is_err());
        assert!("/createaccount".parse::<Route>().is_err());
    }

    #[test]
    fn route_table_holds_exactly_five_pages() {
        let paths: Vec<String> = Route::static_routes()
            .iter()
            .map(|route| route.to_string())
            .collect();
        assert_eq!(
            paths,
            ["/", "/login", "/create-account", "/dashboard", "/contact"]
        );
    }
}
