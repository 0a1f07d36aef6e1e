pub mod service {
    pub mod config_service;
    pub mod selection_service;
}

pub mod config {
    pub mod config;
    pub mod defaults;
    pub mod ports;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod facade {
    pub mod budget_facade;
    pub mod traits {
        pub mod i_budget;
    }
}

pub mod models {
    pub mod budget;
    pub mod entry;
    pub mod selection;
}

pub mod utils {
    pub mod command;
    pub mod estimate;
    pub mod matcher;
    pub mod planner;
    pub mod reconcile;
    pub mod scan;
    pub mod utils;
}
