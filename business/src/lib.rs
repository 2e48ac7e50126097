pub mod application {
    pub mod auth {
        pub mod get_profile;
        pub mod sign_in;
        pub mod sign_in_federated;
        pub mod sign_out;
        pub mod sign_up;
    }
    pub mod catalog {
        pub mod create;
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod suggestion {
        pub mod lookup;
    }
    pub mod vision {
        pub mod recognize;
        pub mod search_images;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod auth {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod get_profile;
            pub mod sign_in;
            pub mod sign_in_federated;
            pub mod sign_out;
            pub mod sign_up;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod suggestion {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod lookup;
        }
    }
    pub mod vision {
        pub mod errors;
        pub mod services;
        pub mod use_cases {
            pub mod recognize;
            pub mod search_images;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
