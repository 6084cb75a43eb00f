// Copyright 2026 Forecasting Technologies LTD.
//
// This file is part of Zeitgeist.
//
// Zeitgeist is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at
// your option) any later version.
//
// Zeitgeist is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Zeitgeist. If not, see <https://www.gnu.org/licenses/>.

use super::*;
use test_case::test_case;

#[test]
fn set_admin_works() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(ArenaProfiles::set_admin(RuntimeOrigin::root(), ALICE, true));
        assert!(ArenaProfiles::is_admin(&ALICE));
        System::assert_last_event(Event::<Runtime>::AdminSet { who: ALICE, is_admin: true }.into());

        assert_ok!(ArenaProfiles::set_admin(RuntimeOrigin::root(), ALICE, false));
        assert!(!ArenaProfiles::is_admin(&ALICE));
        System::assert_last_event(
            Event::<Runtime>::AdminSet { who: ALICE, is_admin: false }.into(),
        );
    });
}

#[test]
fn set_admin_creates_missing_profile_without_points() {
    ExtBuilder::default().build().execute_with(|| {
        assert!(Profiles::<Runtime>::get(CHARLIE).is_none());
        assert_ok!(ArenaProfiles::set_admin(RuntimeOrigin::root(), CHARLIE, true));
        let profile = Profiles::<Runtime>::get(CHARLIE).unwrap();
        assert!(profile.is_admin);
        assert_eq!(profile.ledger, Default::default());
    });
}

#[test_case(true; "grant")]
#[test_case(false; "revoke")]
fn set_admin_fails_on_unchanged_flag(is_admin: bool) {
    ExtBuilder::default().build().execute_with(|| {
        if is_admin {
            assert_ok!(ArenaProfiles::set_admin(RuntimeOrigin::root(), ALICE, true));
        }
        assert_noop!(
            ArenaProfiles::set_admin(RuntimeOrigin::root(), ALICE, is_admin),
            Error::<Runtime>::AdminUnchanged
        );
    });
}

#[test]
fn set_admin_fails_on_signed_origin() {
    ExtBuilder::default().with_admins(vec![BOB]).build().execute_with(|| {
        assert_noop!(
            ArenaProfiles::set_admin(RuntimeOrigin::signed(BOB), ALICE, true),
            DispatchError::BadOrigin
        );
    });
}
