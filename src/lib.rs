pub mod shared {
    pub mod infrastructure {
        pub mod json_file;
    }
}

pub mod modules {
    pub mod motorcycles {
        pub mod core {
            pub mod motorcycle;
        }
        pub mod use_cases {
            pub mod lookup_motorcycle {
                pub mod query;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_motorcycles {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
            pub mod outbound {
                pub mod catalog_in_memory;
                pub mod queries;
            }
        }
    }
}

pub mod shell;
