//! `serde` support for [`QuickList`]s and [`QuickSet`]s
//!
//! Both are represented as plain sequences of their elements. The node layout isn't part of the
//! serialized form; deserializing fills nodes to capacity, like [`Extend`] does.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};

use std::fmt;
use std::marker::PhantomData;

use crate::list::{append_into_link, seek_append};
use crate::order::Order;
use crate::{QuickList, QuickSet};

impl<T: Serialize> Serialize for QuickList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for QuickList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(QuickListVisitor {
            marker: PhantomData,
        })
    }
}

struct QuickListVisitor<T> {
    marker: PhantomData<QuickList<T>>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for QuickListVisitor<T> {
    type Value = QuickList<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of list elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut this = QuickList::new();
        let mut link = &mut this.head;
        while let Some(value) = seq.next_element()? {
            link = seek_append(link);
            append_into_link(link, value).map_err(de::Error::custom)?;
        }

        Ok(this)
    }
}

impl<T: Serialize, O: Order<T>> Serialize for QuickSet<T, O> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_list().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>, O: Order<T>> Deserialize<'de> for QuickSet<T, O> {
    /// Deserializes a set from any sequence of elements
    ///
    /// The input doesn't need to be sorted. Duplicates (according to `O`) are dropped, keeping
    /// the first occurrence.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(QuickSetVisitor {
            marker: PhantomData,
        })
    }
}

struct QuickSetVisitor<T, O> {
    marker: PhantomData<fn() -> QuickSet<T, O>>,
}

impl<'de, T: Deserialize<'de>, O: Order<T>> Visitor<'de> for QuickSetVisitor<T, O> {
    type Value = QuickSet<T, O>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of set elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut this = QuickSet::new();
        while let Some(value) = seq.next_element()? {
            this.insert(value).map_err(de::Error::custom)?;
        }

        Ok(this)
    }
}
