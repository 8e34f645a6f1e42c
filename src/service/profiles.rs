//! The database connection profile catalog.
//!
//! Ordered templates prefilling the JDBC configuration form. The ordinal
//! positions are part of the form contract: the first four entries ship with
//! the application, everything after them needs a separately installed
//! driver, and the final entry is the explicit "no database selected"
//! sentinel mapping to empty strings.

use serde::Serialize;

/// Driver class and URL template for one supported database product.
///
/// Presentational only; the authoritative values are whatever the form
/// ultimately submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionProfile {
    pub label: &'static str,
    pub driver: &'static str,
    pub url: &'static str,
}

/// Number of leading catalog entries whose driver ships with the application.
pub const BUNDLED_DRIVER_COUNT: usize = 4;

pub const CONNECTION_PROFILES: &[ConnectionProfile] = &[
    ConnectionProfile {
        label: "Apache Derby (embedded)",
        driver: "org.apache.derby.jdbc.EmbeddedDriver",
        url: "jdbc:derby:pwsafe;create=true",
    },
    ConnectionProfile {
        label: "Apache Derby (network)",
        driver: "org.apache.derby.jdbc.ClientDriver",
        url: "jdbc:derby://localhost:1527/pwsafe",
    },
    ConnectionProfile {
        label: "MariaDB",
        driver: "org.mariadb.jdbc.Driver",
        url: "jdbc:mariadb://localhost:3306/pwsafe",
    },
    ConnectionProfile {
        label: "HSQLDB",
        driver: "org.hsqldb.jdbc.JDBCDriver",
        url: "jdbc:hsqldb:file:pwsafe",
    },
    ConnectionProfile {
        label: "MySQL",
        driver: "com.mysql.cj.jdbc.Driver",
        url: "jdbc:mysql://localhost:3306/pwsafe",
    },
    ConnectionProfile {
        label: "PostgreSQL",
        driver: "org.postgresql.Driver",
        url: "jdbc:postgresql://localhost:5432/pwsafe",
    },
    ConnectionProfile {
        label: "Oracle",
        driver: "oracle.jdbc.OracleDriver",
        url: "jdbc:oracle:thin:@localhost:1521:pwsafe",
    },
    ConnectionProfile {
        label: "SQL Server",
        driver: "com.microsoft.sqlserver.jdbc.SQLServerDriver",
        url: "jdbc:sqlserver://localhost:1433;databaseName=pwsafe",
    },
    ConnectionProfile {
        label: "DB2",
        driver: "com.ibm.db2.jcc.DB2Driver",
        url: "jdbc:db2://localhost:50000/pwsafe",
    },
    ConnectionProfile {
        label: "",
        driver: "",
        url: "",
    },
];

/// Look up a profile by its ordinal position in the catalog.
pub fn profile(ordinal: usize) -> Option<&'static ConnectionProfile> {
    CONNECTION_PROFILES.get(ordinal)
}

/// Whether the driver at `ordinal` must be installed separately.
pub fn requires_separate_driver(ordinal: usize) -> bool {
    ordinal >= BUNDLED_DRIVER_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ends_with_the_empty_sentinel() {
        let last = CONNECTION_PROFILES.last().expect("empty catalog");
        assert!(last.label.is_empty());
        assert!(last.driver.is_empty());
        assert!(last.url.is_empty());
    }

    #[test]
    fn bundled_entries_do_not_warn() {
        for ordinal in 0..BUNDLED_DRIVER_COUNT {
            assert!(!requires_separate_driver(ordinal));
        }
        for ordinal in BUNDLED_DRIVER_COUNT..CONNECTION_PROFILES.len() {
            assert!(requires_separate_driver(ordinal));
        }
    }

    #[test]
    fn every_real_entry_has_a_driver_and_url() {
        for profile in &CONNECTION_PROFILES[..CONNECTION_PROFILES.len() - 1] {
            assert!(profile.driver.contains('.'), "{profile:?}");
            assert!(profile.url.starts_with("jdbc:"), "{profile:?}");
        }
    }

    #[test]
    fn lookup_is_by_ordinal() {
        assert_eq!(profile(2).map(|p| p.label), Some("MariaDB"));
        assert_eq!(profile(CONNECTION_PROFILES.len()), None);
    }
}
