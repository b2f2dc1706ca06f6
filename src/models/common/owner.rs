//! 资源归属
//!
//! 存储层用可空的 `owner_id` 列表示：NULL 即公共资源。
//! 对外的 JSON 沿用 `id_usuario` 整数字段，`0` 表示公共；
//! 数据库自增主键从 1 开始，因此不会有真实用户的 id 为 0。

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 资源所有者
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    /// 公共资源，所有人可见
    Public,
    User(i64),
}

impl Owner {
    /// 对外表示公共资源的编号
    pub const PUBLIC_WIRE_ID: i64 = 0;

    pub fn from_column(owner_id: Option<i64>) -> Self {
        match owner_id {
            Some(id) => Owner::User(id),
            None => Owner::Public,
        }
    }

    pub fn to_column(self) -> Option<i64> {
        match self {
            Owner::Public => None,
            Owner::User(id) => Some(id),
        }
    }

    pub fn from_wire(id: i64) -> Option<Self> {
        match id {
            Self::PUBLIC_WIRE_ID => Some(Owner::Public),
            id if id > 0 => Some(Owner::User(id)),
            _ => None,
        }
    }

    pub fn wire_id(self) -> i64 {
        match self {
            Owner::Public => Self::PUBLIC_WIRE_ID,
            Owner::User(id) => id,
        }
    }

    pub fn is_public(self) -> bool {
        matches!(self, Owner::Public)
    }
}

impl Serialize for Owner {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.wire_id())
    }
}

impl<'de> Deserialize<'de> for Owner {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = i64::deserialize(deserializer)?;
        Owner::from_wire(id)
            .ok_or_else(|| serde::de::Error::custom(format!("id_usuario inválido: {id}")))
    }
}

/// 列表查询的归属过滤条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipFilter {
    /// 不过滤
    All,
    /// 指定用户的资源加上公共资源
    OwnedOrPublic(i64),
    /// 只含指定用户的资源
    Owned(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_owner_on_the_wire() {
        assert_eq!(serde_json::to_string(&Owner::Public).unwrap(), "0");
        assert_eq!(serde_json::to_string(&Owner::User(7)).unwrap(), "7");
        assert_eq!(serde_json::from_str::<Owner>("0").unwrap(), Owner::Public);
        assert_eq!(serde_json::from_str::<Owner>("12").unwrap(), Owner::User(12));
    }

    #[test]
    fn test_negative_owner_rejected() {
        assert!(serde_json::from_str::<Owner>("-3").is_err());
    }

    #[test]
    fn test_column_mapping() {
        assert_eq!(Owner::from_column(None), Owner::Public);
        assert_eq!(Owner::from_column(Some(4)), Owner::User(4));
        assert_eq!(Owner::Public.to_column(), None);
        assert_eq!(Owner::User(4).to_column(), Some(4));
    }
}
