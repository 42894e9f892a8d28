//! DNS EDNS0 option codes.

//------------ OptionCode ----------------------------------------------------

int_enum! {
    /// DNS EDNS0 option codes.
    ///
    /// The record data of OPT records is a sequence of options. The type of
    /// each of these options is given through a 16 bit value called *option
    /// code.*
    ///
    /// Only the client subnet option is interpreted when decoding. The
    /// other codes are here so they show up nicely.
    ///
    /// The currently assigned option codes can be found in the
    /// [IANA registry].
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-11
    =>
    OptionCode, u16, parse_u16;

    /// Name server identifier (NSID, 3).
    ///
    /// Defined in [RFC 5001].
    ///
    /// [RFC 5001]: https://tools.ietf.org/html/rfc5001
    (Nsid => 3, "NSID")

    /// Client subnet (8).
    ///
    /// Defined in [RFC 7871].
    ///
    /// [RFC 7871]: https://tools.ietf.org/html/rfc7871
    (ClientSubnet => 8, "edns-client-subnet")

    /// Expire (9).
    ///
    /// Defined in [RFC 7314].
    ///
    /// [RFC 7314]: https://tools.ietf.org/html/rfc7314
    (Expire => 9, "EDNS EXPIRE")

    /// DNS cookie (10).
    ///
    /// Defined in [RFC 7873].
    ///
    /// [RFC 7873]: https://tools.ietf.org/html/rfc7873
    (Cookie => 10, "COOKIE")

    /// TCP keepalive (11).
    ///
    /// Defined in [RFC 7828].
    ///
    /// [RFC 7828]: https://tools.ietf.org/html/rfc7828
    (TcpKeepalive => 11, "edns-tcp-keepalive")

    /// Padding (12).
    ///
    /// Defined in [RFC 7830].
    ///
    /// [RFC 7830]: https://tools.ietf.org/html/rfc7830
    (Padding => 12, "Padding")

    /// Extended DNS error (15).
    ///
    /// Defined in [RFC 8914].
    ///
    /// [RFC 8914]: https://tools.ietf.org/html/rfc8914
    (ExtendedError => 15, "Extended DNS Error")
}

int_enum_str_with_prefix!(OptionCode, "OPT", u16);
