//! KDL configuration for part conventions.
//!
//! Conventions can be declared in a file instead of code. Each `part` node
//! names a type and the members it exports and imports; `default` nodes
//! declare type-default contract overrides:
//!
//! ```kdl
//! part type="Acme.Mailer" creation-policy="shared" {
//!     metadata name="Transport" value="smtp"
//!     export member=".type" contract-type="Acme.IMailer"
//!     import member=".ctor"
//!     import member="Logger" allow-default=#true {
//!         required-metadata name="Level" type="System.String"
//!     }
//! }
//!
//! default type="System.String" contract-name="Text"
//! ```
//!
//! Member selectors are a member name, `.ctor` (the greediest public
//! constructor), `.type` (the part type itself) or a member expression such
//! as `"x => x.Send(System.String)"`. Type names resolve through a
//! [`TypeResolver`].
//!
//! Unknown nodes and attributes do not fail parsing; they are collected in
//! [`ParsedConventions::warnings`] and [`ConfigRegistry::warnings`].

pub mod error;
pub mod parse;
pub mod registry;
pub mod resolve;

pub use error::{ConfigError, ConfigWarning, Result};
pub use parse::{ParsedConventions, parse_conventions_str};
pub use registry::{CONFIG_REGISTRY_TYPE, ConfigRegistry, load_conventions};
pub use resolve::TypeResolver;
