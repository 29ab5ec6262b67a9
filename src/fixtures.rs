#[cfg(test)]
pub mod test {
    use std::time::Duration;

    use crate::error::FlagfigError;
    use crate::types::Tags;
    use crate::walk::{Configure, Walker};

    #[derive(Debug, Default, PartialEq)]
    pub struct TestConfig {
        pub host: String,
        pub port: u32,
        pub debug: bool,
        pub database: TestDbConfig,
    }

    impl Configure for TestConfig {
        fn configure<'a>(&'a mut self, w: &mut Walker<'a>) -> Result<(), FlagfigError> {
            w.leaf(
                "host",
                Tags::new().default("localhost").help("The application host."),
                &mut self.host,
            )?;
            w.leaf("port", Tags::new().default("8080"), &mut self.port)?;
            w.leaf("debug", Tags::new().default("false"), &mut self.debug)?;
            w.nested("database", &mut self.database)
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct TestDbConfig {
        pub url: String,
        pub pool_size: u64,
    }

    impl Configure for TestDbConfig {
        fn configure<'a>(&'a mut self, w: &mut Walker<'a>) -> Result<(), FlagfigError> {
            w.leaf("url", Tags::new(), &mut self.url)?;
            w.leaf("pool_size", Tags::new().default("5"), &mut self.pool_size)
        }
    }

    #[test]
    fn test_config_loads_defaults() {
        let mut config = TestConfig::default();
        crate::resolve(Some(&mut config), crate::ResolveInput::default()).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8080);
        assert!(!config.debug);
        assert_eq!(config.database.url, "");
        assert_eq!(config.database.pool_size, 5);
    }

    // -- Fixture mirroring the documented example ------------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct ExampleConfig {
        pub string: String,
        pub int: i64,
        pub boolean: bool,
        pub arr_int64: Vec<i64>,
        pub nested: ExampleNested,
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct ExampleNested {
        pub string: String,
    }

    impl Configure for ExampleConfig {
        fn configure<'a>(&'a mut self, w: &mut Walker<'a>) -> Result<(), FlagfigError> {
            w.leaf("String", Tags::new().default("strvalue"), &mut self.string)?;
            w.leaf("Int", Tags::new().default("42"), &mut self.int)?;
            w.leaf("Bool", Tags::new().default("false"), &mut self.boolean)?;
            w.leaf(
                "ArrInt64",
                Tags::new().default("-1,2,-3,4,-5"),
                &mut self.arr_int64,
            )?;
            w.nested("Nested", &mut self.nested)
        }
    }

    impl Configure for ExampleNested {
        fn configure<'a>(&'a mut self, w: &mut Walker<'a>) -> Result<(), FlagfigError> {
            w.leaf(
                "String",
                Tags::new().default("nestedstrvalue"),
                &mut self.string,
            )
        }
    }

    // -- Two-level nesting with a default at the inner level -------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct Outer {
        pub inner: Inner,
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct Inner {
        pub value: i64,
    }

    impl Configure for Outer {
        fn configure<'a>(&'a mut self, w: &mut Walker<'a>) -> Result<(), FlagfigError> {
            w.nested("Struct", &mut self.inner)
        }
    }

    impl Configure for Inner {
        fn configure<'a>(&'a mut self, w: &mut Walker<'a>) -> Result<(), FlagfigError> {
            w.leaf("Value", Tags::new().default("42"), &mut self.value)
        }
    }

    // -- Required fields -------------------------------------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct RequiredConfig {
        pub value: i64,
        pub with_default: i64,
    }

    impl Configure for RequiredConfig {
        fn configure<'a>(&'a mut self, w: &mut Walker<'a>) -> Result<(), FlagfigError> {
            w.leaf("Value", Tags::new().required(), &mut self.value)?;
            w.leaf(
                "WithDefault",
                Tags::new().default("3").required(),
                &mut self.with_default,
            )
        }
    }

    // -- Types outside the supported set ---------------------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct UnsupportedConfig {
        pub value: f32,
    }

    impl Configure for UnsupportedConfig {
        fn configure<'a>(&'a mut self, w: &mut Walker<'a>) -> Result<(), FlagfigError> {
            w.leaf("Value", Tags::new().default("3.14159"), &mut self.value)
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct UnsupportedNested {
        pub inner: UnsupportedConfig,
    }

    impl Configure for UnsupportedNested {
        fn configure<'a>(&'a mut self, w: &mut Walker<'a>) -> Result<(), FlagfigError> {
            w.nested("Struct", &mut self.inner)
        }
    }

    // -- One field of every supported type -------------------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct AllTypes {
        pub int32: i32,
        pub int64: i64,
        pub uint32: u32,
        pub uint64: u64,
        pub float64: f64,
        pub boolean: bool,
        pub string: String,
        pub duration: Duration,
        pub int32s: Vec<i32>,
        pub int64s: Vec<i64>,
        pub uint32s: Vec<u32>,
        pub uint64s: Vec<u64>,
        pub float64s: Vec<f64>,
        pub booleans: Vec<bool>,
        pub strings: Vec<String>,
        pub durations: Vec<Duration>,
    }

    impl Configure for AllTypes {
        fn configure<'a>(&'a mut self, w: &mut Walker<'a>) -> Result<(), FlagfigError> {
            w.leaf("int32", Tags::new(), &mut self.int32)?;
            w.leaf("int64", Tags::new(), &mut self.int64)?;
            w.leaf("uint32", Tags::new(), &mut self.uint32)?;
            w.leaf("uint64", Tags::new(), &mut self.uint64)?;
            w.leaf("float64", Tags::new(), &mut self.float64)?;
            w.leaf("boolean", Tags::new(), &mut self.boolean)?;
            w.leaf("string", Tags::new(), &mut self.string)?;
            w.leaf("duration", Tags::new(), &mut self.duration)?;
            w.leaf("int32s", Tags::new(), &mut self.int32s)?;
            w.leaf("int64s", Tags::new(), &mut self.int64s)?;
            w.leaf("uint32s", Tags::new(), &mut self.uint32s)?;
            w.leaf("uint64s", Tags::new(), &mut self.uint64s)?;
            w.leaf("float64s", Tags::new(), &mut self.float64s)?;
            w.leaf("booleans", Tags::new(), &mut self.booleans)?;
            w.leaf("strings", Tags::new(), &mut self.strings)?;
            w.leaf("durations", Tags::new(), &mut self.durations)
        }
    }
}
