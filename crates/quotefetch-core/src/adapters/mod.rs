mod nyse;
mod schwab;

pub use nyse::NyseAdapter;
pub use schwab::SchwabAdapter;
