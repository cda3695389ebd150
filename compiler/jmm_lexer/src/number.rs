//! Numeric-literal state machine.
//!
//! The grammar is `digits? ('.' digits*)? (('e'|'E') ('+'|'-')? digits+)?
//! suffix?` where `suffix` is `l`/`L` (long) or `d`/`D` (double). Rather
//! than nested conditionals, the accumulation runs through an explicit
//! automaton (integer part, fraction, exponent marker, exponent sign,
//! exponent digits) fed one lookahead character at a time, so the
//! transition edge cases (bad exponent, suffix combinations) are testable
//! without a scanner.
//!
//! The machine only delimits and classifies; it never computes a numeric
//! value. The accumulated text is verbatim source text, suffix included.

/// Classification of a completed numeric literal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum NumberClass {
    Int,
    Long,
    Double,
}

/// Outcome of feeding one character to the machine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Step {
    /// Character accepted; feed the next one.
    Consumed,
    /// Character accepted as a suffix; the literal is complete.
    ConsumedAndDone,
    /// Character rejected; the literal is complete and the character
    /// belongs to whatever comes next.
    Done,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    IntegerPart,
    Fraction,
    /// `e`/`E` just consumed; a sign or digit must follow.
    ExponentMarker,
    /// `e`/`E` and a sign consumed; a digit must follow.
    ExponentSign,
    ExponentDigits,
}

/// Accumulator for one numeric literal.
pub(crate) struct NumberMachine {
    state: State,
    text: String,
    class: NumberClass,
    bad_exponent: bool,
}

impl NumberMachine {
    /// Start at the integer part (entered on a leading digit).
    pub(crate) fn new() -> Self {
        NumberMachine {
            state: State::IntegerPart,
            text: String::new(),
            class: NumberClass::Int,
            bad_exponent: false,
        }
    }

    /// Start in the fractional part with a leading `.` already consumed
    /// (entered on `.` followed by a digit).
    pub(crate) fn from_dot() -> Self {
        NumberMachine {
            state: State::Fraction,
            text: String::from("."),
            class: NumberClass::Double,
            bad_exponent: false,
        }
    }

    /// Feed the current lookahead character.
    pub(crate) fn push(&mut self, c: char) -> Step {
        match self.state {
            State::IntegerPart => match c {
                '0'..='9' => self.consume(c),
                '.' => {
                    self.class = NumberClass::Double;
                    self.state = State::Fraction;
                    self.consume(c)
                }
                'e' | 'E' => self.exponent_marker(c),
                'l' | 'L' => self.suffix(c, NumberClass::Long),
                'd' | 'D' => self.suffix(c, NumberClass::Double),
                _ => Step::Done,
            },
            State::Fraction => match c {
                '0'..='9' => self.consume(c),
                'e' | 'E' => self.exponent_marker(c),
                'l' | 'L' => self.suffix(c, NumberClass::Long),
                'd' | 'D' => self.suffix(c, NumberClass::Double),
                _ => Step::Done,
            },
            State::ExponentMarker => match c {
                '+' | '-' => {
                    self.state = State::ExponentSign;
                    self.consume(c)
                }
                '0'..='9' => {
                    self.state = State::ExponentDigits;
                    self.consume(c)
                }
                _ => self.missing_exponent_digits(c),
            },
            State::ExponentSign => match c {
                '0'..='9' => {
                    self.state = State::ExponentDigits;
                    self.consume(c)
                }
                _ => self.missing_exponent_digits(c),
            },
            State::ExponentDigits => match c {
                '0'..='9' => self.consume(c),
                'l' | 'L' => self.suffix(c, NumberClass::Long),
                'd' | 'D' => self.suffix(c, NumberClass::Double),
                _ => Step::Done,
            },
        }
    }

    /// Whether the exponent marker was not followed by at least one digit.
    /// The accumulated text (bad marker included) is still the literal.
    pub(crate) fn bad_exponent(&self) -> bool {
        self.bad_exponent
    }

    /// Finish the literal, yielding its verbatim text and classification.
    pub(crate) fn finish(self) -> (String, NumberClass) {
        (self.text, self.class)
    }

    fn consume(&mut self, c: char) -> Step {
        self.text.push(c);
        Step::Consumed
    }

    fn suffix(&mut self, c: char, class: NumberClass) -> Step {
        self.text.push(c);
        self.class = class;
        Step::ConsumedAndDone
    }

    fn exponent_marker(&mut self, c: char) -> Step {
        self.class = NumberClass::Double;
        self.state = State::ExponentMarker;
        self.consume(c)
    }

    /// No digit after the exponent marker (or its sign). The literal keeps
    /// the accumulated text and scanning does not backtrack; a suffix
    /// letter sitting right there is still taken, matching the scanner's
    /// fall-through to the suffix check.
    fn missing_exponent_digits(&mut self, c: char) -> Step {
        self.bad_exponent = true;
        self.class = NumberClass::Double;
        match c {
            'l' | 'L' => self.suffix(c, NumberClass::Long),
            'd' | 'D' => self.suffix(c, NumberClass::Double),
            _ => Step::Done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Drive a machine over `input`, terminated by a space, and return
    /// (text, class, bad_exponent, unconsumed suffix of input).
    fn run(mut machine: NumberMachine, input: &str) -> (String, NumberClass, bool, String) {
        let mut rest = String::new();
        let mut chars = input.chars().chain(std::iter::once(' '));
        let mut pending: Option<char> = None;
        for c in &mut chars {
            match machine.push(c) {
                Step::Consumed => {}
                Step::ConsumedAndDone => break,
                Step::Done => {
                    pending = Some(c);
                    break;
                }
            }
        }
        if let Some(c) = pending {
            if c != ' ' {
                rest.push(c);
            }
        }
        for c in chars {
            if c != ' ' {
                rest.push(c);
            }
        }
        let bad = machine.bad_exponent();
        let (text, class) = machine.finish();
        (text, class, bad, rest)
    }

    fn digits(input: &str) -> (String, NumberClass, bool, String) {
        run(NumberMachine::new(), input)
    }

    #[test]
    fn plain_integer() {
        assert_eq!(digits("3"), ("3".into(), NumberClass::Int, false, String::new()));
        assert_eq!(
            digits("12345"),
            ("12345".into(), NumberClass::Int, false, String::new())
        );
    }

    #[test]
    fn long_suffix() {
        assert_eq!(digits("10L"), ("10L".into(), NumberClass::Long, false, String::new()));
        assert_eq!(digits("10l"), ("10l".into(), NumberClass::Long, false, String::new()));
    }

    #[test]
    fn double_suffix() {
        assert_eq!(digits("7D"), ("7D".into(), NumberClass::Double, false, String::new()));
        assert_eq!(digits("7d"), ("7d".into(), NumberClass::Double, false, String::new()));
    }

    #[test]
    fn fraction_classifies_double() {
        assert_eq!(
            digits("3.14"),
            ("3.14".into(), NumberClass::Double, false, String::new())
        );
        // Trailing digits are optional after the point
        assert_eq!(digits("3."), ("3.".into(), NumberClass::Double, false, String::new()));
    }

    #[test]
    fn leading_dot_entry() {
        assert_eq!(
            run(NumberMachine::from_dot(), "5"),
            (".5".into(), NumberClass::Double, false, String::new())
        );
    }

    #[test]
    fn exponent_classifies_double() {
        assert_eq!(
            digits("2e10"),
            ("2e10".into(), NumberClass::Double, false, String::new())
        );
        assert_eq!(
            digits("1.5E-3"),
            ("1.5E-3".into(), NumberClass::Double, false, String::new())
        );
        assert_eq!(
            digits("6e+4"),
            ("6e+4".into(), NumberClass::Double, false, String::new())
        );
    }

    #[test]
    fn exponent_reachable_from_both_entry_points() {
        // IntegerPart and Fraction both transition on the marker
        assert_eq!(digits("2e3"), ("2e3".into(), NumberClass::Double, false, String::new()));
        assert_eq!(
            run(NumberMachine::from_dot(), "5e2"),
            (".5e2".into(), NumberClass::Double, false, String::new())
        );
    }

    #[test]
    fn suffix_after_exponent() {
        assert_eq!(
            digits("2e4L"),
            ("2e4L".into(), NumberClass::Long, false, String::new())
        );
        assert_eq!(
            digits("2e4d"),
            ("2e4d".into(), NumberClass::Double, false, String::new())
        );
    }

    #[test]
    fn suffix_after_fraction_is_long() {
        // The two entry paths behave identically: l/L always wins.
        assert_eq!(
            digits("3.14L"),
            ("3.14L".into(), NumberClass::Long, false, String::new())
        );
        assert_eq!(
            run(NumberMachine::from_dot(), "5L"),
            (".5L".into(), NumberClass::Long, false, String::new())
        );
    }

    #[test]
    fn bare_exponent_marker_is_flagged() {
        assert_eq!(digits("2e"), ("2e".into(), NumberClass::Double, true, String::new()));
        assert_eq!(
            digits("2e+"),
            ("2e+".into(), NumberClass::Double, true, String::new())
        );
    }

    #[test]
    fn bad_exponent_still_takes_a_suffix() {
        assert_eq!(digits("2eL"), ("2eL".into(), NumberClass::Long, true, String::new()));
        assert_eq!(
            digits("2e-d"),
            ("2e-d".into(), NumberClass::Double, true, String::new())
        );
    }

    #[test]
    fn stray_second_dot_is_left_for_rescanning() {
        // "1.2.3" → literal "1.2", rest ".3" rescanned by the next call
        assert_eq!(
            digits("1.2.3"),
            ("1.2".into(), NumberClass::Double, false, ".3".into())
        );
    }

    #[test]
    fn identifier_chars_terminate_the_literal() {
        assert_eq!(digits("3x"), ("3".into(), NumberClass::Int, false, "x".into()));
    }
}
