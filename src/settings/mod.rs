mod consts;
mod logging;
mod source;

pub use logging::init_logger;
pub use source::{
    FlagsConfigSource, JsonFileConfigSource, PromptConfigSource, QrConfigFile, QrConfigSource,
};
