pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod dashboard_store;
        pub mod live_sessions;
    }
}

pub mod modules {
    pub mod upgrades {
        pub mod core {
            pub mod filters;
            pub mod live_event;
            pub mod readiness;
            pub mod resolution;
            pub mod stats;
            pub mod tabular;
            pub mod ticket_description;
            pub mod workstation;
        }
        pub mod use_cases {
            pub mod application_error;
            pub mod update_workstation_field {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod add_workstation {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod edit_workstation {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_workstation {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod import_workstations {
                pub mod command;
                pub mod handler;
                pub mod parse;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_dashboard {
                pub mod handler;
                pub mod projection;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod export_workstations {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_project_ticket {
                pub mod command;
                pub mod handler;
                pub mod in_flight;
                pub mod outcome;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod live_updates {
                pub mod inbound {
                    pub mod ws;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod psa;
                pub mod psa_connectwise;
                pub mod psa_in_memory;
                pub mod ticketing_client;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod create_project_ticket_tests;
    }
}
