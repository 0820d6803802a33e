pub mod shared {
    pub mod core {
        pub mod clock;
    }
    pub mod infrastructure {
        pub mod persistence_store;
        pub mod viewport_observer;
    }
}

pub mod modules {
    pub mod progress {
        pub mod core {
            pub mod completion;
            pub mod record;
            pub mod visibility;
            pub mod visited_set;
        }
        pub mod use_cases {
            pub mod track_progress {
                pub mod errors;
                pub mod tracker;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod report_visibility {
                pub mod worker;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod read_progress {
                pub mod projection;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
