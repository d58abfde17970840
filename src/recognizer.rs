/*
 * The $1 Unistroke Recognizer and Protractor (rust version)
 *
 * Original authors:
 *
 *	    Jacob O. Wobbrock, Ph.D.
 * 	    The Information School
 *	    University of Washington
 *	    Seattle, WA 98195-2840
 *	    wobbrock@uw.edu
 *
 *	    Andrew D. Wilson, Ph.D.
 *	    Microsoft Research
 *	    One Microsoft Way
 *	    Redmond, WA 98052
 *	    awilson@microsoft.com
 *
 *	    Yang Li, Ph.D.
 *	    Department of Computer Science and Engineering
 *	    University of Washington
 *	    Seattle, WA 98195-2840
 *	    yangli@cs.washington.edu
 *
 * The academic publications for the $1 recognizer and for Protractor,
 * and what should be used to cite them, are:
 *
 *	Wobbrock, J.O., Wilson, A.D. and Li, Y. (2007). Gestures without
 *	  libraries, toolkits or training: A $1 recognizer for user interface
 *	  prototypes. Proceedings of the ACM Symposium on User Interface
 *	  Software and Technology (UIST '07). Newport, Rhode Island
 *	  (October 7-10, 2007). New York: ACM Press, pp. 159-168.
 *
 *	Li, Y. (2010). Protractor: A fast and accurate gesture recognizer.
 *	  Proceedings of the ACM Conference on Human Factors in Computing
 *	  Systems (CHI '10). Atlanta, Georgia (April 10-15, 2010).
 *	  New York: ACM Press, pp. 2169-2172.
 *
 * This software is distributed under the "New BSD License" agreement:
 *
 * Copyright (c) 2007-2012, Jacob O. Wobbrock, Andrew D. Wilson and Yang Li.
 * All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are met:
 *    * Redistributions of source code must retain the above copyright
 *      notice, this list of conditions and the following disclaimer.
 *    * Redistributions in binary form must reproduce the above copyright
 *      notice, this list of conditions and the following disclaimer in the
 *      documentation and/or other materials provided with the distribution.
 *    * Neither the names of the University of Washington nor Microsoft,
 *      nor the names of its contributors may be used to endorse or promote
 *      products derived from this software without specific prior written
 *      permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS
 * IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO,
 * THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR
 * PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL Jacob O. Wobbrock OR Andrew D. Wilson
 * OR Yang Li OR Ferran Pujol Camins BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL,
 * EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT
 * OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
 * INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT,
 * STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY
 * OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF
 * SUCH DAMAGE.
**/

use crate::{
    error::Result,
    gesture::UniStroke,
    golden_section_recognizer,
    normalize::NormalizedStroke,
    parameters::RecognizerParameters,
    point::Point,
    protractor_recognizer,
    template_store::TemplateStore,
};
use log::{debug, trace};

/// How a candidate is compared against each template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Golden-section search over rotations within +-angle_range (original $1).
    /// Distances are mean point distances in reference-square units.
    GoldenSection,
    /// Closed-form optimal rotation on unit vectors.
    /// Distances are angles in radians.
    #[default]
    Protractor,
}

impl Strategy {
    /// Maps the boolean flag of `Recognizer::recognize` to a strategy
    pub fn from_use_protractor(use_protractor: bool) -> Self {
        if use_protractor {
            Strategy::Protractor
        } else {
            Strategy::GoldenSection
        }
    }
}

/// Outcome of a successful match
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    /// Name of the best matching template
    pub name: String,
    /// 1 / distance, capped at `f32::MAX`
    pub score: f32,
    /// Distance to the best matching template
    pub distance: f32,
    pub strategy: Strategy,
}

/// Converts a distance into a score; a perfect match gets the largest finite score
pub fn score_from_distance(distance: f32) -> f32 {
    (1.0 / distance).min(f32::MAX)
}

/// Classifies single strokes against an immutable template store.
#[derive(Debug, Clone)]
pub struct Recognizer {
    store: TemplateStore,
}

impl Recognizer {
    /// Creates a recognizer with the built-in templates and default parameters
    pub fn new() -> Result<Self> {
        Ok(Self::with_templates(TemplateStore::builtin(
            RecognizerParameters::default(),
        )?))
    }

    /// Creates a recognizer over an already built template store
    pub fn with_templates(store: TemplateStore) -> Self {
        Self { store }
    }

    /// The read-only template store, e.g. to draw a matched template
    pub fn templates(&self) -> &TemplateStore {
        &self.store
    }

    /// Classifies a raw stroke.
    /// `use_protractor` selects Protractor over the golden-section search.
    pub fn recognize(&self, points: &[Point], use_protractor: bool) -> Result<Option<Recognition>> {
        self.recognize_with(points, Strategy::from_use_protractor(use_protractor))
    }

    /// Classifies a raw stroke with the given strategy.
    /// The stroke is validated first; a valid stroke gives `Ok(None)` when the store holds no templates.
    pub fn recognize_with(&self, points: &[Point], strategy: Strategy) -> Result<Option<Recognition>> {
        let candidate = self.normalize(points)?;
        if self.store.is_empty() {
            return Ok(None);
        }

        let mut best: Option<(&UniStroke, f32)> = None;
        for template in &self.store {
            let d = self.distance(&candidate, template, strategy);
            trace!("comparing {} -> {}", template.name, d);
            // strict comparison: the first registered template wins ties
            if best.map_or(true, |(_, min)| d < min) {
                best = Some((template, d));
            }
        }

        Ok(best.map(|(template, distance)| {
            let score = score_from_distance(distance);
            debug!("recognized {} (score: {})", template.name, score);
            Recognition {
                name: template.name.clone(),
                score,
                distance,
                strategy,
            }
        }))
    }

    /// Normalizes a raw stroke with the parameters the templates were built with
    pub fn normalize(&self, points: &[Point]) -> Result<NormalizedStroke> {
        NormalizedStroke::new(points, self.store.params())
    }

    /// Distance between a normalized candidate and one template, lower is closer
    pub fn distance(&self, candidate: &NormalizedStroke, template: &UniStroke, strategy: Strategy) -> f32 {
        match strategy {
            Strategy::GoldenSection => {
                golden_section_recognizer::distance(&candidate.points, template, self.store.params())
            }
            Strategy::Protractor => {
                protractor_recognizer::optimal_cosine_distance(&candidate.vector, &template.vector)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecognizerError;

    fn points(raw: &[(f32, f32)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_score_from_distance() {
        assert_eq!(score_from_distance(0.5), 2.0);
        assert_eq!(score_from_distance(0.0), f32::MAX);
        assert_eq!(score_from_distance(1e-45), f32::MAX);
    }

    #[test]
    fn test_strategy_flag() {
        assert_eq!(Strategy::from_use_protractor(true), Strategy::Protractor);
        assert_eq!(Strategy::from_use_protractor(false), Strategy::GoldenSection);
        assert_eq!(Strategy::default(), Strategy::Protractor);
    }

    #[test]
    fn test_empty_store_is_no_match() {
        let recognizer = Recognizer::with_templates(TemplateStore::default());
        let stroke = points(&[(0.0, 0.0), (5.0, 10.0), (10.0, 0.0)]);
        assert_eq!(recognizer.recognize(&stroke, true), Ok(None));
        assert_eq!(recognizer.recognize(&stroke, false), Ok(None));
    }

    #[test]
    fn test_empty_store_still_rejects_invalid_stroke() {
        let recognizer = Recognizer::with_templates(TemplateStore::default());
        assert_eq!(
            recognizer.recognize(&points(&[(1.0, 1.0)]), true),
            Err(RecognizerError::TooFewPoints { len: 1 })
        );
        assert_eq!(
            recognizer.recognize(&[], false),
            Err(RecognizerError::TooFewPoints { len: 0 })
        );
        let line = points(&[(0.0, 0.0), (50.0, 0.0)]);
        assert!(matches!(
            recognizer.recognize(&line, true),
            Err(RecognizerError::DegenerateBoundingBox { .. })
        ));
    }

    #[test]
    fn test_rejects_short_stroke() {
        let recognizer = Recognizer::new().unwrap();
        assert_eq!(
            recognizer.recognize(&points(&[(3.0, 4.0)]), true),
            Err(RecognizerError::TooFewPoints { len: 1 })
        );
    }

    #[test]
    fn test_first_registered_wins_ties() {
        let v = points(&[(0.0, 0.0), (5.0, 10.0), (10.0, 0.0)]);
        let mut store = TemplateStore::default();
        store.register("first", &v).unwrap();
        store.register("second", &v).unwrap();
        let recognizer = Recognizer::with_templates(store);
        for strategy in [Strategy::GoldenSection, Strategy::Protractor] {
            let result = recognizer.recognize_with(&v, strategy).unwrap().unwrap();
            assert_eq!(result.name, "first");
            assert_eq!(result.strategy, strategy);
        }
    }

    #[test]
    fn test_perfect_match_has_finite_score() {
        let v = points(&[(0.0, 0.0), (5.0, 10.0), (10.0, 0.0)]);
        let mut store = TemplateStore::default();
        store.register("v", &v).unwrap();
        let recognizer = Recognizer::with_templates(store);
        let result = recognizer.recognize(&v, true).unwrap().unwrap();
        assert!(result.score.is_finite());
        assert!(result.score > 100.0);
    }
}
