use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    AccessCatalog,
    ManageCart,
    ManageWishlist,
    EditScentProfile,
    UseScentBuilder,
    AccessMarketplace,
    AccessDeals,
}

impl Permission {
    /// Name of the premium feature unlocked by this permission, if any.
    pub fn premium_feature(self) -> Option<&'static str> {
        match self {
            Permission::UseScentBuilder => Some("Custom Scent Builder"),
            Permission::AccessMarketplace => Some("P2P Marketplace Access"),
            Permission::AccessDeals => Some("Deal Finder"),
            _ => None,
        }
    }
}

const REGULAR_PERMISSIONS: &[Permission] = &[
    Permission::AccessCatalog,
    Permission::ManageCart,
    Permission::ManageWishlist,
    Permission::EditScentProfile,
];
const PREMIUM_PERMISSIONS: &[Permission] = &[
    Permission::AccessCatalog,
    Permission::ManageCart,
    Permission::ManageWishlist,
    Permission::EditScentProfile,
    Permission::UseScentBuilder,
    Permission::AccessMarketplace,
    Permission::AccessDeals,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UserRole {
    Regular,
    Premium,
}

impl UserRole {
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            UserRole::Regular => REGULAR_PERMISSIONS,
            UserRole::Premium => PREMIUM_PERMISSIONS,
        }
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }

    pub fn for_premium_flag(is_premium: bool) -> UserRole {
        if is_premium {
            UserRole::Premium
        } else {
            UserRole::Regular
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_role_has_no_premium_permissions() {
        let perms = UserRole::Regular.permissions();
        assert_eq!(perms.len(), 4);
        for perm in perms {
            assert!(perm.premium_feature().is_none(), "{:?}", perm);
        }
        assert!(!UserRole::Regular.has_permission(Permission::UseScentBuilder));
        assert!(!UserRole::Regular.has_permission(Permission::AccessDeals));
    }

    #[test]
    fn premium_role_extends_regular() {
        for perm in UserRole::Regular.permissions() {
            assert!(UserRole::Premium.has_permission(*perm));
        }
        assert!(UserRole::Premium.has_permission(Permission::UseScentBuilder));
        assert!(UserRole::Premium.has_permission(Permission::AccessMarketplace));
        assert!(UserRole::Premium.has_permission(Permission::AccessDeals));
    }

    #[test]
    fn role_follows_premium_flag() {
        assert_eq!(UserRole::for_premium_flag(true), UserRole::Premium);
        assert_eq!(UserRole::for_premium_flag(false), UserRole::Regular);
    }
}
