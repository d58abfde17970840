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
    geometry,
    gesture::UniStroke,
    normalize::rotate_by,
    parameters::RecognizerParameters,
    point::Point,
};

/// Golden ratio conjugate, (sqrt(5) - 1) / 2
const PHI: f32 = 0.618_034;
/// Each step narrows the bracket by PHI; 100 steps take +-PI below f32 resolution
const MAX_ITERATIONS: usize = 100;

/// Distance used by the original $1 recognizer.
/// Searches the rotation in [-angle_range, +angle_range] that best aligns the
/// candidate with the template and returns the path distance at that rotation.
pub fn distance(points: &[Point], template: &UniStroke, params: &RecognizerParameters) -> f32 {
    distance_at_best_angle(
        points,
        template,
        -params.angle_range,
        params.angle_range,
        params.angle_precision,
    )
}

/// Golden-section search for the angle in [a, b] minimizing the path distance.
/// Stops once the bracket is no wider than `threshold` and returns the lower of
/// the two final probes, or after `MAX_ITERATIONS` narrowing steps, whichever comes first.
pub fn distance_at_best_angle(
    points: &[Point],
    template: &UniStroke,
    mut a: f32,
    mut b: f32,
    threshold: f32,
) -> f32 {
    let mut x1 = PHI * a + (1.0 - PHI) * b;
    let mut f1 = distance_at_angle(points, template, x1);
    let mut x2 = (1.0 - PHI) * a + PHI * b;
    let mut f2 = distance_at_angle(points, template, x2);
    for _ in 0..MAX_ITERATIONS {
        if (b - a).abs() <= threshold {
            break;
        }
        if f1 < f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = PHI * a + (1.0 - PHI) * b;
            f1 = distance_at_angle(points, template, x1);
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = (1.0 - PHI) * a + PHI * b;
            f2 = distance_at_angle(points, template, x2);
        }
    }
    f1.min(f2)
}

/// Path distance between the template and the candidate rotated by `radians` about its centroid
pub fn distance_at_angle(points: &[Point], template: &UniStroke, radians: f32) -> f32 {
    let rotated = rotate_by(points, radians);
    path_distance(&rotated, &template.points)
}

/// Mean distance between points with the same index.
/// Both paths must have the same number of points.
pub fn path_distance(points1: &[Point], points2: &[Point]) -> f32 {
    debug_assert_eq!(points1.len(), points2.len());
    let sum: f32 = points1
        .iter()
        .zip(points2)
        .map(|(p, q)| geometry::euclidean_distance(p, q))
        .sum();
    sum / points1.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::NormalizedStroke;

    fn hook() -> Vec<Point> {
        (0..40)
            .map(|i| {
                let t = i as f32 / 39.0 * 4.0;
                Point::new(t.cos() * 60.0 + 10.0 * t, t.sin() * 40.0)
            })
            .collect()
    }

    #[test]
    fn test_path_distance() {
        let a = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let b = [Point::new(0.0, 3.0), Point::new(1.0, 1.0)];
        assert_eq!(path_distance(&a, &b), 2.0);
        assert_eq!(path_distance(&a, &a), 0.0);
    }

    #[test]
    fn test_search_finds_rotation_inside_window() {
        let params = RecognizerParameters::default();
        let template = UniStroke::new("hook", &hook(), &params).unwrap();
        let tilted = rotate_by(&template.points, 0.3);

        let at_zero = distance_at_angle(&tilted, &template, 0.0);
        let best = distance(&tilted, &template, &params);
        assert!(best < at_zero / 4.0, "best {} vs unaligned {}", best, at_zero);
        assert!(best < 5.0);
    }

    #[test]
    fn test_search_terminates_without_precision() {
        let params = RecognizerParameters::default();
        let template = UniStroke::new("hook", &hook(), &params).unwrap();
        let tilted = rotate_by(&template.points, 0.3);
        for threshold in [0.0, -1.0, f32::NAN] {
            let d = distance_at_best_angle(&tilted, &template, -0.8, 0.8, threshold);
            assert!(d < 1.0, "threshold {}: distance {}", threshold, d);
        }
    }

    #[test]
    fn test_identical_stroke_is_close() {
        let params = RecognizerParameters::default();
        let template = UniStroke::new("hook", &hook(), &params).unwrap();
        let candidate = NormalizedStroke::new(&hook(), &params).unwrap();
        assert!(distance_at_angle(&candidate.points, &template, 0.0) < 1e-3);
        // the probes never land exactly on 0, so the search only gets near it
        assert!(distance(&candidate.points, &template, &params) < 5.0);
    }
}
