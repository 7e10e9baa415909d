//! DNS record cards

use serde::{Deserialize, Serialize};

use super::seeded_rng;
use crate::settings::DnsDomain;

const TTLS: &[u32] = &[300, 900, 3600, 14400, 86400];

/// One resolved record for a watched domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub domain: String,
    pub record_type: String,
    pub value: String,
    pub ttl: u32,
}

/// One placeholder record per watched record type, in record-type order
pub fn records(domain: &DnsDomain) -> Vec<DnsRecord> {
    let mut rng = seeded_rng(&["dns", &domain.domain]);
    let name = domain.domain.as_str();

    domain
        .record_types
        .iter()
        .map(|record_type| {
            let value = match record_type.as_str() {
                "A" => format!("93.184.{}.{}", rng.u8(0..=255), rng.u8(1..=254)),
                "AAAA" => format!("2606:2800:{:x}::{:x}", rng.u16(..), rng.u16(1..)),
                "CNAME" => format!("cdn.{}", name),
                "MX" => format!("10 mail.{}", name),
                "TXT" => format!("v=spf1 include:_spf.{} ~all", name),
                "NS" => format!("ns{}.{}", rng.u8(1..=4), name),
                "SOA" => format!(
                    "ns1.{} hostmaster.{} {} 7200 3600 1209600 3600",
                    name,
                    name,
                    rng.u32(2024010100..2026123199)
                ),
                "SRV" => format!("10 5 443 service.{}", name),
                "PTR" => format!("host-{}.{}", rng.u16(1..1000), name),
                "CAA" => "0 issue \"letsencrypt.org\"".to_string(),
                other => format!("unsupported record type {}", other),
            };

            DnsRecord {
                domain: domain.domain.clone(),
                record_type: record_type.clone(),
                value,
                ttl: TTLS[rng.usize(..TTLS.len())],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_record_per_type() {
        let domain = DnsDomain::new("example.net", ["A", "MX", "TXT"]).unwrap();
        let records = records(&domain);

        let types: Vec<_> = records.iter().map(|r| r.record_type.as_str()).collect();
        assert_eq!(types, vec!["A", "MX", "TXT"]);
        assert!(records.iter().all(|r| r.domain == "example.net"));
    }

    #[test]
    fn test_record_values() {
        let domain = DnsDomain::new("example.net", ["A", "MX", "TXT", "CAA"]).unwrap();
        let records = records(&domain);

        // Record types iterate in sorted order: A, CAA, MX, TXT
        assert!(records[0].value.parse::<std::net::Ipv4Addr>().is_ok());
        assert!(records[1].value.contains("letsencrypt"));
        assert_eq!(records[2].value, "10 mail.example.net");
        assert!(records[3].value.starts_with("v=spf1"));
    }

    #[test]
    fn test_aaaa_is_valid_ipv6() {
        let domain = DnsDomain::new("example.net", ["AAAA"]).unwrap();
        let records = records(&domain);
        assert!(records[0].value.parse::<std::net::Ipv6Addr>().is_ok());
    }

    #[test]
    fn test_ttl_from_known_set() {
        let domain = DnsDomain::new("example.net", crate::settings::RECORD_TYPES.to_vec()).unwrap();
        for r in records(&domain) {
            assert!(TTLS.contains(&r.ttl));
        }
    }
}
