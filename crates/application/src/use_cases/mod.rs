pub mod lookup;

pub use lookup::{
    LookupAddrUseCase, LookupCnameUseCase, LookupIpUseCase, LookupMxUseCase, LookupNsUseCase,
    LookupTextUseCase, Upstream,
};
