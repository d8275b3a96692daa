use chess::{
    Board, ClickInput, DragInput, Game, GameError, InputOutcome, MoveRequest, PieceColor,
    PieceKind, Rejection, RuleSet, Square,
};

fn mv(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> MoveRequest {
    MoveRequest::from_coords(from_row, from_col, to_row, to_col).unwrap()
}

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn opening_sequence_from_standard_position() {
    let mut game = Game::new();

    game.make_move(mv(6, 4, 4, 4)).unwrap();
    assert_eq!(game.current_player(), PieceColor::Black);
    assert!(game.board().is_empty(sq("e2")));
    assert_eq!(
        game.board().piece_at(sq("e4")).map(|p| p.kind),
        Some(PieceKind::Pawn)
    );

    game.make_move(mv(1, 4, 3, 4)).unwrap();
    assert_eq!(game.current_player(), PieceColor::White);

    // Both knight jumps are available before either is played.
    assert!(game.is_valid_move(mv(7, 1, 5, 2)));
    assert!(game.is_valid_move(mv(7, 1, 5, 0)));

    // The c1 bishop is still shut in by the d2 pawn.
    assert_eq!(
        game.make_move(mv(7, 2, 6, 3)),
        Err(GameError::IllegalMove(Rejection::OwnPieceOnTarget))
    );
    assert_eq!(
        game.make_move(mv(7, 2, 5, 4)),
        Err(GameError::IllegalMove(Rejection::IllegalPieceMove(
            PieceKind::Bishop
        )))
    );
    assert_eq!(game.current_player(), PieceColor::White);

    game.make_move(mv(7, 1, 5, 2)).unwrap();
    assert_eq!(game.current_player(), PieceColor::Black);
    assert_eq!(
        game.board().to_placement(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/2N5/PPPP1PPP/R1BQKBNR"
    );
}

#[test]
fn white_cannot_move_twice_in_a_row() {
    let mut game = Game::new();
    game.make_move(mv(6, 4, 4, 4)).unwrap();
    assert_eq!(
        game.make_move(mv(6, 3, 4, 3)),
        Err(GameError::IllegalMove(Rejection::NotYourTurn {
            to_move: PieceColor::Black
        }))
    );
}

#[test]
fn turns_only_toggle_on_accepted_moves() {
    let mut game = Game::new();
    let attempts = [
        (mv(6, 4, 3, 4), false),
        (mv(6, 4, 4, 4), true),
        (mv(6, 3, 4, 3), false),
        (mv(0, 1, 2, 2), true),
        (mv(7, 3, 3, 7), true),
        (mv(1, 5, 2, 5), true),
        (mv(3, 7, 0, 4), true),
    ];
    let mut expected = PieceColor::White;
    for (request, legal) in attempts {
        assert_eq!(game.make_move(request).is_ok(), legal, "{request:?}");
        if legal {
            expected = expected.opposite();
        }
        assert_eq!(game.current_player(), expected);
    }
    // The queen took the king: nothing here knows about check.
    assert_eq!(
        game.board().piece_at(sq("e8")).map(|p| (p.kind, p.color)),
        Some((PieceKind::Queen, PieceColor::White))
    );
}

#[test]
fn click_and_drag_agree() {
    let requests = [
        (sq("e2"), sq("e4")),
        (sq("e2"), sq("e5")),
        (sq("g1"), sq("f3")),
        (sq("f1"), sq("c4")),
        (sq("e7"), sq("e5")),
    ];

    for (from, to) in requests {
        let mut by_click = Game::new();
        let click = ClickInput;
        click.click(&mut by_click, from);
        let clicked = click.click(&mut by_click, to);

        let mut by_drag = Game::new();
        let mut drag = DragInput::new();
        drag.press(&mut by_drag, from);
        let dropped = drag.release(&mut by_drag, to);

        assert_eq!(clicked, dropped, "{from} -> {to}");
        assert_eq!(by_click.board(), by_drag.board());
        assert_eq!(by_click.current_player(), by_drag.current_player());
    }
}

#[test]
fn click_outcomes_walk_through_a_turn() {
    let mut game = Game::new();
    let click = ClickInput;

    assert_eq!(click.click(&mut game, sq("e7")), InputOutcome::Ignored);
    assert_eq!(click.click(&mut game, sq("d2")), InputOutcome::Selected(sq("d2")));
    assert_eq!(
        game.selection_targets(),
        vec![sq("d4"), sq("d3")]
    );
    assert_eq!(
        click.click(&mut game, sq("d5")),
        InputOutcome::Rejected(Rejection::IllegalPieceMove(PieceKind::Pawn))
    );
    assert_eq!(game.selection(), None);
    assert_eq!(click.click(&mut game, sq("d2")), InputOutcome::Selected(sq("d2")));
    assert!(matches!(
        click.click(&mut game, sq("d4")),
        InputOutcome::Moved(applied) if applied.to == sq("d4")
    ));
}

#[test]
fn strict_rules_close_the_double_step_gap() {
    let placement = "8/8/8/8/8/4n3/4P3/8";
    let mut lenient = Game::from_placement(placement, RuleSet::default()).unwrap();
    assert!(lenient.make_move(mv(6, 4, 4, 4)).is_ok());

    let strict_rules = RuleSet {
        pawn_double_step_checks_path: true,
    };
    let mut strict = Game::from_placement(placement, strict_rules).unwrap();
    assert!(strict.make_move(mv(6, 4, 4, 4)).is_err());
    assert_eq!(strict.board(), &Board::from_placement(placement).unwrap());
}
