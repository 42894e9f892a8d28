//! Resource Record (RR) TYPEs

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource Record Types.
    ///
    /// Each resource record has a 16 bit type value indicating what kind of
    /// information is represented by the record. Questions use the same
    /// values plus a few query types that never appear in records.
    ///
    /// Record data is only interpreted for the types that have a variant in
    /// [`RecordData`][crate::rdata::RecordData]. All other values are
    /// perfectly acceptable and are kept as is.
    ///
    /// The currently assigned values are maintained in an [IANA registry].
    /// Only the more common ones have a mnemonic here.
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    =>
    Rtype, u16, parse_u16;

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// A mail destination (obsolete).
    (MD => 3, "MD")

    /// A mail forwarder (obsolete).
    (MF => 4, "MF")

    /// The canonical name for an alias.
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A mailbox domain name (experimental).
    (MB => 7, "MB")

    /// A mail group member (experimental).
    (MG => 8, "MG")

    /// A mail rename domain name (experimental).
    (MR => 9, "MR")

    /// A null resource record (experimental).
    (NULL => 10, "NULL")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Host information.
    (HINFO => 13, "HINFO")

    /// Mailbox or mail list information.
    (MINFO => 14, "MINFO")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// IPv6 address.
    ///
    /// See RFC 3596.
    (AAAA => 28, "AAAA")

    /// Server selection.
    ///
    /// See RFC 2782.
    (SRV => 33, "SRV")

    /// Redirection of a subtree.
    ///
    /// See RFC 6672.
    (DNAME => 39, "DNAME")

    /// The EDNS0 pseudo record.
    ///
    /// See RFC 6891.
    (OPT => 41, "OPT")

    /// Delegation signer.
    ///
    /// See RFC 4034.
    (DS => 43, "DS")

    /// RRset signature.
    ///
    /// See RFC 4034.
    (RRSIG => 46, "RRSIG")

    /// Next secure record.
    (NSEC => 47, "NSEC")

    /// DNS public key.
    ///
    /// See RFC 4034.
    (DNSKEY => 48, "DNSKEY")

    /// Hashed next secure record.
    (NSEC3 => 50, "NSEC3")

    /// NSEC3 parameters.
    (NSEC3PARAM => 51, "NSEC3PARAM")

    /// TLS certificate association.
    ///
    /// See RFC 6698.
    (TLSA => 52, "TLSA")

    /// Child DS.
    ///
    /// See RFC 7344.
    (CDS => 59, "CDS")

    /// Child DNSKEY.
    ///
    /// See RFC 7344.
    (CDNSKEY => 60, "CDNSKEY")

    /// General purpose service binding.
    (SVCB => 64, "SVCB")

    /// Service binding for HTTPS.
    (HTTPS => 65, "HTTPS")

    /// Incremental zone transfer.
    (IXFR => 251, "IXFR")

    /// Full zone transfer.
    (AXFR => 252, "AXFR")

    /// A request for all records the server has available.
    (ANY => 255, "ANY")

    /// Certification Authority Restriction.
    ///
    /// See RFC 6844.
    (CAA => 257, "CAA")
}

int_enum_str_with_prefix!(Rtype, "TYPE", u16);

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Rtype::AAAA.to_string(), "AAAA");
        assert_eq!(Rtype::from_int(65280).to_string(), "TYPE65280");
        assert_eq!(format!("{:?}", Rtype::MX), "Rtype::MX");
        assert_eq!(format!("{:?}", Rtype::from_int(999)), "Rtype(999)");
    }

    #[test]
    fn equality() {
        assert_eq!(Rtype::from_int(1), Rtype::A);
        assert_eq!(u16::from(Rtype::OPT), 41);
    }
}
