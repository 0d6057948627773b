use crate::test_fixture::TestFixture;
use crate::SCALAR_7;

/// Want each default user starts with
pub const USER_WANT: i128 = 40_000 * SCALAR_7;

/// Fixture with two users holding want and the vault approved to pull it
pub fn create_fixture_with_data<'a>() -> TestFixture<'a> {
    let mut fixture = TestFixture::create();
    fixture.create_user(USER_WANT);
    fixture.create_user(USER_WANT);
    fixture
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Address;

    #[test]
    fn test_create_fixture_with_data() {
        let fixture: TestFixture<'_> = create_fixture_with_data();

        assert_eq!(fixture.users.len(), 2);
        for user in fixture.users.iter() {
            assert_eq!(fixture.want.balance(user), USER_WANT);
        }
        assert_eq!(fixture.vault.total_shares(), 0);
        assert_eq!(fixture.vault.balance(), 0);
        assert_eq!(fixture.strategy.vault(), Some(fixture.vault.address.clone()));
        let want: Address = fixture.vault.want();
        assert_eq!(want, fixture.want.address);
    }
}
