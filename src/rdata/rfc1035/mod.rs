//! Record data from [RFC 1035]: initial record types.
//!
//! This RFC defines the initial set of record types. The DNAME type from
//! [RFC 6672] lives here as well since it is just another single name.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035
//! [RFC 6672]: https://tools.ietf.org/html/rfc6672

pub use self::a::A;
pub use self::mx::Mx;
pub use self::name::{Cname, Dname, Ns, Ptr};
pub use self::null::Null;
pub use self::soa::Soa;
pub use self::txt::Txt;

mod a;
mod mx;
mod name;
mod null;
mod soa;
mod txt;
