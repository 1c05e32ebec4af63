use std::borrow::Cow;

use itertools::Itertools;

/// Presentation conventions for one fiat currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiatCurrency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub minor_digits: usize,
    pub symbol_on_left: bool,
    pub space_between: bool,
    pub thousands_separator: &'static str,
    pub decimal_separator: &'static str,
}

const fn fiat(
    code: &'static str,
    symbol: &'static str,
    minor_digits: usize,
    symbol_on_left: bool,
    space_between: bool,
    thousands_separator: &'static str,
    decimal_separator: &'static str,
) -> FiatCurrency {
    FiatCurrency {
        code,
        symbol,
        minor_digits,
        symbol_on_left,
        space_between,
        thousands_separator,
        decimal_separator,
    }
}

/// Symbol on the left, no space, `,` thousands and `.` decimals.
const fn plain(code: &'static str, symbol: &'static str, minor_digits: usize) -> FiatCurrency {
    fiat(code, symbol, minor_digits, true, false, ",", ".")
}

/// The ISO 4217 currencies a user can pick as their fiat currency, by code.
pub const FIAT_CURRENCIES: &[FiatCurrency] = &[
    plain("AED", "د.إ", 2),
    plain("AFN", "؋", 2),
    plain("ALL", "L", 2),
    plain("AMD", "֏", 2),
    plain("ANG", "ƒ", 2),
    plain("AOA", "Kz", 2),
    plain("ARS", "$", 2),
    plain("AUD", "$", 2),
    plain("AWG", "ƒ", 2),
    plain("AZN", "₼", 2),
    plain("BAM", "KM", 2),
    plain("BBD", "$", 2),
    plain("BDT", "৳", 2),
    plain("BGN", "лв", 2),
    plain("BHD", ".د.ب", 3),
    plain("BIF", "FBu", 0),
    plain("BMD", "$", 2),
    plain("BND", "$", 2),
    plain("BOB", "Bs.", 2),
    fiat("BRL", "R$", 2, true, true, ".", ","),
    plain("BSD", "$", 2),
    plain("BTN", "Nu.", 2),
    plain("BWP", "P", 2),
    plain("BYN", "Br", 2),
    plain("BZD", "$", 2),
    plain("CAD", "$", 2),
    plain("CDF", "FC", 2),
    fiat("CHF", "CHF", 2, true, true, "'", "."),
    plain("CLP", "$", 0),
    plain("CNY", "¥", 2),
    plain("COP", "$", 2),
    plain("CRC", "₡", 2),
    plain("CUP", "$", 2),
    plain("CVE", "$", 2),
    fiat("CZK", "Kč", 2, false, true, " ", ","),
    plain("DJF", "Fdj", 0),
    fiat("DKK", "kr.", 2, false, true, ".", ","),
    plain("DOP", "$", 2),
    plain("DZD", "د.ج", 2),
    plain("EGP", "£", 2),
    plain("ERN", "Nfk", 2),
    plain("ETB", "Br", 2),
    fiat("EUR", "€", 2, false, true, ".", ","),
    plain("FJD", "$", 2),
    plain("FKP", "£", 2),
    plain("GBP", "£", 2),
    plain("GEL", "₾", 2),
    plain("GHS", "₵", 2),
    plain("GIP", "£", 2),
    plain("GMD", "D", 2),
    plain("GNF", "FG", 0),
    plain("GTQ", "Q", 2),
    plain("GYD", "$", 2),
    plain("HKD", "$", 2),
    plain("HNL", "L", 2),
    plain("HTG", "G", 2),
    fiat("HUF", "Ft", 2, false, true, " ", ","),
    fiat("IDR", "Rp", 2, true, false, ".", ","),
    plain("ILS", "₪", 2),
    plain("INR", "₹", 2),
    plain("IQD", "ع.د", 3),
    plain("IRR", "﷼", 2),
    fiat("ISK", "kr", 0, false, true, ".", ","),
    plain("JMD", "$", 2),
    plain("JOD", "د.ا", 3),
    plain("JPY", "¥", 0),
    plain("KES", "KSh", 2),
    plain("KGS", "с", 2),
    plain("KHR", "៛", 2),
    plain("KMF", "CF", 0),
    plain("KPW", "₩", 2),
    plain("KRW", "₩", 0),
    plain("KWD", "د.ك", 3),
    plain("KYD", "$", 2),
    plain("KZT", "₸", 2),
    plain("LAK", "₭", 2),
    plain("LBP", "ل.ل", 2),
    plain("LKR", "Rs", 2),
    plain("LRD", "$", 2),
    plain("LSL", "L", 2),
    plain("LYD", "ل.د", 3),
    plain("MAD", "د.م.", 2),
    plain("MDL", "L", 2),
    plain("MGA", "Ar", 2),
    plain("MKD", "ден", 2),
    plain("MMK", "K", 2),
    plain("MNT", "₮", 2),
    plain("MOP", "P", 2),
    plain("MRU", "UM", 2),
    plain("MUR", "₨", 2),
    plain("MVR", "Rf", 2),
    plain("MWK", "MK", 2),
    plain("MXN", "$", 2),
    plain("MYR", "RM", 2),
    plain("MZN", "MT", 2),
    plain("NAD", "$", 2),
    plain("NGN", "₦", 2),
    plain("NIO", "C$", 2),
    fiat("NOK", "kr", 2, false, true, " ", ","),
    plain("NPR", "₨", 2),
    plain("NZD", "$", 2),
    plain("OMR", "﷼", 3),
    plain("PAB", "B/.", 2),
    plain("PEN", "S/", 2),
    plain("PGK", "K", 2),
    plain("PHP", "₱", 2),
    plain("PKR", "₨", 2),
    fiat("PLN", "zł", 2, false, true, " ", ","),
    plain("PYG", "₲", 0),
    plain("QAR", "﷼", 2),
    fiat("RON", "lei", 2, false, true, ".", ","),
    plain("RSD", "дин.", 2),
    fiat("RUB", "₽", 2, false, true, " ", ","),
    plain("RWF", "FRw", 0),
    plain("SAR", "﷼", 2),
    plain("SBD", "$", 2),
    plain("SCR", "₨", 2),
    plain("SDG", "ج.س.", 2),
    fiat("SEK", "kr", 2, false, true, " ", ","),
    plain("SGD", "$", 2),
    plain("SHP", "£", 2),
    plain("SLE", "Le", 2),
    plain("SOS", "S", 2),
    plain("SRD", "$", 2),
    plain("SSP", "£", 2),
    plain("STN", "Db", 2),
    plain("SVC", "$", 2),
    plain("SYP", "£", 2),
    plain("SZL", "E", 2),
    plain("THB", "฿", 2),
    plain("TJS", "SM", 2),
    plain("TMT", "m", 2),
    plain("TND", "د.ت", 3),
    plain("TOP", "T$", 2),
    plain("TRY", "₺", 2),
    plain("TTD", "$", 2),
    plain("TWD", "NT$", 2),
    plain("TZS", "TSh", 2),
    plain("UAH", "₴", 2),
    plain("UGX", "USh", 0),
    plain("USD", "$", 2),
    plain("UYU", "$", 2),
    plain("UZS", "so'm", 2),
    plain("VES", "Bs.S", 2),
    fiat("VND", "₫", 0, false, true, ".", ","),
    plain("VUV", "VT", 0),
    plain("WST", "T", 2),
    plain("XAF", "FCFA", 0),
    plain("XCD", "$", 2),
    plain("XOF", "CFA", 0),
    plain("XPF", "₣", 0),
    plain("YER", "﷼", 2),
    plain("ZAR", "R", 2),
    plain("ZMW", "ZK", 2),
    plain("ZWL", "$", 2),
];

impl FiatCurrency {
    /// Look up a fiat currency by its ISO code, ignoring case.
    pub fn from_code(code: &str) -> Option<&'static FiatCurrency> {
        FIAT_CURRENCIES
            .iter()
            .find(|fiat| fiat.code.eq_ignore_ascii_case(code))
    }

    /// Render a plain decimal string (`"1234.5"`) as money (`"$1,234.50"`).
    ///
    /// The fraction is padded up to the currency's minor digits, but never
    /// past `number_of_decimals`, the precision the amount was truncated
    /// to. Digits beyond the minor digits are kept. Anything that is not a
    /// plain decimal is returned unchanged.
    pub fn format(&self, decimal: &str, number_of_decimals: Option<u32>) -> String {
        let (sign, unsigned) = match decimal.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", decimal),
        };
        let (integer_part, fractional_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let is_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if !is_digits(integer_part) || !is_digits(fractional_part) {
            return decimal.to_owned();
        }

        let integer_part = if integer_part.is_empty() {
            "0"
        } else {
            integer_part
        };

        let width = number_of_decimals.map_or(self.minor_digits, |decimals| {
            self.minor_digits.min(decimals as usize)
        });
        let grouped = group_thousands(integer_part, self.thousands_separator);
        let fractional_part = format!("{fractional_part:0<width$}");
        let amount = if fractional_part.is_empty() {
            grouped
        } else {
            format!("{grouped}{}{fractional_part}", self.decimal_separator)
        };

        let space = if self.space_between { " " } else { "" };
        if self.symbol_on_left {
            format!("{sign}{}{space}{amount}", self.symbol)
        } else {
            format!("{sign}{amount}{space}{}", self.symbol)
        }
    }
}

/// `digits` must be ASCII.
fn group_thousands(digits: &str, separator: &str) -> String {
    let leading = digits.len() % 3;
    let (head, tail) = digits.split_at(leading);
    let groups = tail.as_bytes().chunks(3).map(String::from_utf8_lossy);

    std::iter::once(Cow::Borrowed(head))
        .filter(|group| !group.is_empty())
        .chain(groups)
        .join(separator)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn usd() -> &'static FiatCurrency {
        FiatCurrency::from_code("usd").unwrap()
    }

    #[test]
    fn pads_to_minor_digits() {
        assert_eq!("$2.80", usd().format("2.8", None));
        assert_eq!("$0.00", usd().format("0", None));
        assert_eq!("$0.50", usd().format(".5", None));
    }

    #[test]
    fn keeps_precision_beyond_minor_digits() {
        assert_eq!("$2.8045", usd().format("2.8045", None));
    }

    #[test]
    fn groups_thousands() {
        assert_eq!("$1,234,567.10", usd().format("1234567.1", None));
        assert_eq!("$123.00", usd().format("123", None));
        assert_eq!("-$1,000.00", usd().format("-1000", None));
    }

    #[test]
    fn honors_symbol_position_and_separators() {
        let eur = FiatCurrency::from_code("EUR").unwrap();
        assert_eq!("1.234,50 €", eur.format("1234.5", None));

        let jpy = FiatCurrency::from_code("jpy").unwrap();
        assert_eq!("¥1,500", jpy.format("1500", None));

        let chf = FiatCurrency::from_code("chf").unwrap();
        assert_eq!("CHF 12'000.00", chf.format("12000", None));
    }

    #[test]
    fn padding_stops_at_requested_precision() {
        assert_eq!("$2", usd().format("2", Some(0)));
        assert_eq!("$2.8", usd().format("2.8", Some(1)));
        assert_eq!("$2.80", usd().format("2.8", Some(2)));
        assert_eq!("$2.80", usd().format("2.8", Some(6)));
    }

    #[test]
    fn covers_less_common_fiat() {
        let nzd = FiatCurrency::from_code("nzd").unwrap();
        assert_eq!("$2.80", nzd.format("2.8", None));

        let sek = FiatCurrency::from_code("sek").unwrap();
        assert_eq!("1 234,50 kr", sek.format("1234.5", None));

        let kwd = FiatCurrency::from_code("KWD").unwrap();
        assert_eq!(3, kwd.minor_digits);

        for code in ["hkd", "sgd", "pln", "zar", "try", "thb"] {
            assert!(FiatCurrency::from_code(code).is_some(), "{code}");
        }
    }

    #[test]
    fn codes_are_unique() {
        let codes = FIAT_CURRENCIES.iter().map(|fiat| fiat.code).collect_vec();
        assert_eq!(codes.len(), codes.iter().unique().count());
    }

    #[test]
    fn non_decimal_input_is_returned_unchanged() {
        assert_eq!("é12", usd().format("é12", None));
        assert_eq!("1.2.3", usd().format("1.2.3", None));
        assert_eq!("-x", usd().format("-x", None));
    }

    #[test]
    fn unknown_codes_are_not_fiat() {
        assert!(FiatCurrency::from_code("ETH").is_none());
        assert!(FiatCurrency::from_code("DAI").is_none());
    }
}
