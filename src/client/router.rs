use dioxus::prelude::*;

use crate::client::{
    components::{guard::RequireSession, Navbar},
    routes::{Apply, CreateJob, Dashboard, Jobs, Login, NotFound, Register},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Jobs {},

    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[layout(RequireSession)]

        #[route("/dashboard")]
        Dashboard {},

        #[route("/create-job")]
        CreateJob {},

        #[route("/apply/:job_id")]
        Apply { job_id: i64 },

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
