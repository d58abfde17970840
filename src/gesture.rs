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
    normalize::NormalizedStroke,
    parameters::RecognizerParameters,
    point::Point,
};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// A named template shape.
/// Its raw points are normalized once, when the template is built:
/// resampled, rotated to the indicative angle, scaled and translated to the origin.
/// The unit vector used by Protractor is derived from the normalized points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UniStroke {
    /// Gesture class
    pub name: String,
    /// Gesture points (normalized)
    pub points: Vec<Point>,
    /// Normalized points as a unit vector (for Protractor)
    pub vector: Vec<f32>,
}

impl UniStroke {
    /// Constructs a new template from a list of raw points and a name
    pub fn new(name: &str, raw: &[Point], params: &RecognizerParameters) -> Result<Self> {
        let NormalizedStroke { points, vector } = NormalizedStroke::new(raw, params)?;
        Ok(Self {
            name: name.into(),
            points,
            vector,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecognizerError;

    #[test]
    fn test_new_template() {
        let raw: Vec<Point> = [(0.0, 0.0), (5.0, 10.0), (10.0, 0.0)]
            .into_iter()
            .map(Point::from)
            .collect();
        let params = RecognizerParameters::default();
        let template = UniStroke::new("caret", &raw, &params).unwrap();
        assert_eq!(template.name, "caret");
        assert_eq!(template.points.len(), 64);
        assert_eq!(template.vector.len(), 128);
        assert_eq!(template, UniStroke::new("caret", &raw, &params).unwrap());
    }

    #[test]
    fn test_new_template_rejects_single_point() {
        let params = RecognizerParameters::default();
        assert_eq!(
            UniStroke::new("dot", &[Point::new(1.0, 2.0)], &params),
            Err(RecognizerError::TooFewPoints { len: 1 })
        );
    }
}
