use super::*;

#[test]
fn starts_on_first_slide() {
    let carousel = Carousel::default();
    assert_eq!(carousel.index(), 0);
    assert_eq!(carousel.current(), SLIDES.first());
}

#[test]
fn advance_wraps_after_last_slide() {
    let mut carousel = Carousel::default();
    for expected in 1..SLIDES.len() {
        carousel.advance();
        assert_eq!(carousel.index(), expected);
    }
    carousel.advance();
    assert_eq!(carousel.index(), 0);
}

#[test]
fn empty_carousel_stays_put() {
    let mut carousel = Carousel::new(&[]);
    carousel.advance();
    assert_eq!(carousel.index(), 0);
    assert!(carousel.current().is_none());
}
