pub mod application {
    pub mod catalog {
        pub mod add_product_dialog;
        pub mod delete_product_dialog;
        pub mod edit_product_dialog;
        pub mod get_active_dialog;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod dialog;
        pub mod errors;
        pub mod services;
        pub mod use_cases {
            pub mod add_product_dialog;
            pub mod delete_product_dialog;
            pub mod edit_product_dialog;
            pub mod get_active_dialog;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
}
