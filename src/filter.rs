//! Lazy predicate filtering over record sets and zones
//!
//! [`filter`] pulls from its source only as far as the consumer advances, so
//! looking up the SOA of a large zone stops at the first match.

use crate::model::{ResourceRecordSet, Zone};
use std::iter::FusedIterator;

/// A test applied to each element of a sequence
pub trait Predicate<T: ?Sized> {
    fn apply(&self, input: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn apply(&self, input: &T) -> bool {
        self(input)
    }
}

/// Iterator yielding only the source elements accepted by a predicate
#[derive(Debug, Clone)]
pub struct Filter<I, P> {
    source: I,
    predicate: P,
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.source.by_ref() {
            if self.predicate.apply(&item) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, P> FusedIterator for Filter<I, P>
where
    I: FusedIterator,
    P: Predicate<I::Item>,
{
}

/// Filter `source` lazily, preserving its order
pub fn filter<I, P>(source: I, predicate: P) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: Predicate<I::Item>,
{
    Filter {
        source: source.into_iter(),
        predicate,
    }
}

/// Matches record sets by exact owner name and type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAndTypeEqualTo {
    name: String,
    rtype: String,
}

impl Predicate<ResourceRecordSet> for NameAndTypeEqualTo {
    fn apply(&self, input: &ResourceRecordSet) -> bool {
        input.name() == self.name && input.rtype() == self.rtype
    }
}

pub fn name_and_type_equal_to(name: &str, rtype: &str) -> NameAndTypeEqualTo {
    NameAndTypeEqualTo {
        name: name.to_string(),
        rtype: rtype.to_string(),
    }
}

/// Matches zones or record sets by exact name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEqualTo {
    name: String,
}

impl Predicate<Zone> for NameEqualTo {
    fn apply(&self, input: &Zone) -> bool {
        input.name == self.name
    }
}

impl Predicate<ResourceRecordSet> for NameEqualTo {
    fn apply(&self, input: &ResourceRecordSet) -> bool {
        input.name() == self.name
    }
}

/// Errors pass through so a failing zone is reported, not hidden.
impl<E> Predicate<Result<Zone, E>> for NameEqualTo {
    fn apply(&self, input: &Result<Zone, E>) -> bool {
        match input {
            Ok(zone) => Predicate::<Zone>::apply(self, zone),
            Err(_) => true,
        }
    }
}

pub fn name_equal_to(name: &str) -> NameEqualTo {
    NameEqualTo {
        name: name.to_string(),
    }
}

/// Matches record sets by type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEqualTo {
    rtype: String,
}

impl Predicate<ResourceRecordSet> for TypeEqualTo {
    fn apply(&self, input: &ResourceRecordSet) -> bool {
        input.rtype() == self.rtype
    }
}

pub fn type_equal_to(rtype: &str) -> TypeEqualTo {
    TypeEqualTo {
        rtype: rtype.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record_set;
    use std::cell::Cell;
    use std::net::Ipv4Addr;

    #[test]
    fn test_filter_preserves_order() {
        let evens: Vec<u32> = filter(1u32..=10, |n: &u32| n % 2 == 0).collect();
        assert_eq!(evens, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_filter_is_lazy() {
        let pulled = Cell::new(0);
        let source = (0..1000i32).inspect(|_| pulled.set(pulled.get() + 1));

        let mut matches = filter(source, |n: &i32| *n >= 3);
        assert_eq!(matches.next(), Some(3));
        assert_eq!(pulled.get(), 4);
    }

    #[test]
    fn test_filter_exhausts_cleanly() {
        let mut none = filter(vec!["a", "b"], |s: &&str| *s == "c");
        assert_eq!(none.next(), None);
        assert_eq!(none.next(), None);
    }

    #[test]
    fn test_record_set_predicates() {
        let sets = vec![
            record_set::ns("example.com.", 86400, "ns1.example.com."),
            record_set::a("example.com.", 300, Ipv4Addr::new(192, 0, 2, 1)),
            record_set::a("www.example.com.", 300, Ipv4Addr::new(192, 0, 2, 2)),
        ];

        let found: Vec<_> = filter(sets.iter().cloned(), name_and_type_equal_to("example.com.", "A"))
            .collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].to_string(), "example.com. A 300 [192.0.2.1]");

        assert_eq!(filter(sets.iter().cloned(), type_equal_to("A")).count(), 2);
        assert_eq!(
            filter(sets.iter().cloned(), name_equal_to("example.com.")).count(),
            2
        );
    }

    #[test]
    fn test_name_equal_to_keeps_errors() {
        let zone = Zone {
            name: "a.example.".to_string(),
            id: "a.example.".to_string(),
            ttl: 60,
            email: "admin.a.example.".to_string(),
        };
        let items: Vec<Result<Zone, String>> = vec![
            Ok(zone.clone()),
            Err("broken".to_string()),
            Ok(Zone {
                name: "b.example.".to_string(),
                ..zone
            }),
        ];

        let kept: Vec<_> = filter(items, name_equal_to("b.example.")).collect();
        assert_eq!(kept.len(), 2);
        assert!(kept[0].is_err());
        assert_eq!(kept[1].as_ref().unwrap().name, "b.example.");
    }
}
